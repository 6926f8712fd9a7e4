pub mod calculate_row_bands;
pub mod viewport_mapping;
