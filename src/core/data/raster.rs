use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RasterError {
    PixelOutsideBounds {
        pixel: Point,
        size: PixelSize,
    },
    BoundsMismatch {
        raster_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                raster_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "raster size {} does not match buffer size {}",
                    raster_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, size } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} raster",
                    pixel.x, pixel.y, size.width, size.height
                )
            }
        }
    }
}

impl Error for RasterError {}

pub type RasterData = Vec<u32>;

/// A grid of packed `0x00RRGGBB` colours, row-major from the top-left pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    size: PixelSize,
    pixels: RasterData,
}

impl Raster {
    #[must_use]
    pub fn new(size: PixelSize) -> Self {
        Self {
            size,
            pixels: vec![0; size.area()],
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(PixelSize::default())
    }

    pub fn from_data(size: PixelSize, pixels: RasterData) -> Result<Self, RasterError> {
        if size.area() != pixels.len() {
            return Err(RasterError::BoundsMismatch {
                raster_size: size.area(),
                buffer_size: pixels.len(),
            });
        }

        Ok(Self { size, pixels })
    }

    #[must_use]
    pub fn size(&self) -> PixelSize {
        self.size
    }

    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    #[must_use]
    pub fn into_pixels(self) -> RasterData {
        self.pixels
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    fn index_of(&self, pixel: Point) -> Result<usize, RasterError> {
        let inside = pixel.x >= 0
            && pixel.y >= 0
            && (pixel.x as u32) < self.size.width
            && (pixel.y as u32) < self.size.height;

        if !inside {
            return Err(RasterError::PixelOutsideBounds {
                pixel,
                size: self.size,
            });
        }

        Ok(pixel.y as usize * self.size.width as usize + pixel.x as usize)
    }

    pub fn pixel(&self, pixel: Point) -> Result<u32, RasterError> {
        let index = self.index_of(pixel)?;

        Ok(self.pixels[index])
    }
}
