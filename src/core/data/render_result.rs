use std::time::Duration;

use crate::core::data::raster::Raster;

/// A completed render: the raster and the wall-clock time spent computing it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderResult {
    pub raster: Raster,
    pub elapsed: Duration,
}

impl RenderResult {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            raster: Raster::empty(),
            elapsed: Duration::ZERO,
        }
    }
}
