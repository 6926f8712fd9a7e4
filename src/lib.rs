mod adapters;
mod controllers;
mod core;
mod presenters;

pub use adapters::pixel_format::{
    copy_packed_to_bgra, copy_packed_to_rgb, packed_to_bgra, packed_to_rgb,
};
pub use controllers::cli::cli_render::{CliRenderController, DEFAULT_IMAGE_SIZE};
pub use controllers::interactive::{
    ControllerError, FrameData, InteractiveController, InteractiveControllerPresenterPort,
    RenderError, RenderEvent,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::generate_fractal::generate_fractal::{
    GenerateFractalError, generate_fractal, generate_fractal_on, render_mandelbrot,
    render_mandelbrot_on,
};
pub use crate::core::actions::generate_fractal::ports::colour_map::ColourMap;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_fractal::progress::RenderProgress;
pub use crate::core::actions::generate_fractal::worker_pool::{WorkerPool, refresh_worker_pool};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::pixel_size::{DisplayGeometry, DpiScale, PixelSize};
pub use crate::core::data::point::Point;
pub use crate::core::data::raster::{Raster, RasterData, RasterError};
pub use crate::core::data::render_config::{RenderConfig, RenderConfigError};
pub use crate::core::data::render_result::RenderResult;
pub use crate::core::data::selection_rect::SelectionRect;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::{
    MIN_MAX_ITERATIONS, MandelbrotAlgorithm, escape_time,
};
pub use crate::core::fractals::mandelbrot::colour_maps::coefficient_banding::{
    CoefficientBanding, ColourCoefficients, map_colour,
};
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_CENTER, DEFAULT_COEFFICIENTS, DEFAULT_MAX_ITERATIONS, ZOOM_OUT_FACTOR,
};
pub use crate::core::util::viewport_mapping::{
    PixelMapping, calc_scale, find_corner, map_pixel, unmap_point,
};
pub use presenters::file::ppm::PpmFilePresenter;
