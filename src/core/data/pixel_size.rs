/// Physical raster dimensions in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Inflates both dimensions by an oversampling factor.
    #[must_use]
    pub fn scaled(&self, multiplier: u32) -> Self {
        Self {
            width: self.width.saturating_mul(multiplier),
            height: self.height.saturating_mul(multiplier),
        }
    }
}

/// Device pixel density, physical pixels per logical unit on each axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DpiScale {
    pub x: f64,
    pub y: f64,
}

impl Default for DpiScale {
    fn default() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}

/// The display surface as the UI reports it: a logical size plus its pixel density.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DisplayGeometry {
    pub width: f64,
    pub height: f64,
    pub dpi: DpiScale,
}

impl DisplayGeometry {
    #[must_use]
    pub fn new(width: f64, height: f64, dpi: DpiScale) -> Self {
        Self { width, height, dpi }
    }

    /// Geometry where one logical unit is one physical pixel.
    #[must_use]
    pub fn from_pixels(size: PixelSize) -> Self {
        Self::new(f64::from(size.width), f64::from(size.height), DpiScale::default())
    }

    /// Physical pixel size of the surface, rounding partial pixels up.
    /// Negative or NaN extents collapse to zero.
    #[must_use]
    pub fn pixel_size(&self) -> PixelSize {
        PixelSize {
            width: (self.width * self.dpi.x).ceil() as u32,
            height: (self.height * self.dpi.y).ceil() as u32,
        }
    }
}
