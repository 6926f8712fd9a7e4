use std::time::Duration;

use crate::core::data::raster::Raster;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub raster: Raster,
    pub elapsed: Duration,
}
