pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod pixel_size;
pub mod point;
pub mod raster;
pub mod render_config;
pub mod render_result;
pub mod selection_rect;
pub mod viewport;
