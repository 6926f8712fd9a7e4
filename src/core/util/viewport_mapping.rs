//! Transforms between the pixel grid and the complex plane.
//!
//! A viewport is described by its centre and a single scale (pixels per plane
//! unit) shared by both axes, so pixels are always square. Pixel `y` grows
//! downward while the imaginary axis grows upward.

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;

/// Plane point shown at pixel `(0, 0)` of an image of `size` centred on `center`.
#[must_use]
pub fn find_corner(size: PixelSize, center: Complex, scale: f64) -> Complex {
    let offset = Complex {
        real: f64::from(size.width) / 2.0 / scale,
        imag: -f64::from(size.height) / 2.0 / scale,
    };

    center - offset
}

#[must_use]
pub fn map_pixel(pixel: Point, upper_left: Complex, scale: f64) -> Complex {
    Complex {
        real: upper_left.real + f64::from(pixel.x) / scale,
        imag: upper_left.imag - f64::from(pixel.y) / scale,
    }
}

/// Inverse of [`map_pixel`]; returns fractional pixel coordinates.
#[must_use]
pub fn unmap_point(point: Complex, upper_left: Complex, scale: f64) -> (f64, f64) {
    (
        (point.real - upper_left.real) * scale,
        (upper_left.imag - point.imag) * scale,
    )
}

/// Scale that fits `rect` inside an image of `size` without distortion.
///
/// The smaller plane extent is matched to the smaller screen extent, so the
/// longer screen axis shows extra plane area.
#[must_use]
pub fn calc_scale(size: PixelSize, rect: ComplexRect) -> f64 {
    let plane_min = rect.width().abs().min(rect.height().abs());
    let screen_min = f64::from(size.width.min(size.height));

    screen_min / plane_min
}

/// Precomputed corner and scale for mapping every pixel of one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelMapping {
    upper_left: Complex,
    scale: f64,
}

impl PixelMapping {
    #[must_use]
    pub fn new(size: PixelSize, center: Complex, scale: f64) -> Self {
        Self {
            upper_left: find_corner(size, center, scale),
            scale,
        }
    }

    #[must_use]
    pub fn upper_left(&self) -> Complex {
        self.upper_left
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    #[must_use]
    pub fn map(&self, pixel: Point) -> Complex {
        map_pixel(pixel, self.upper_left, self.scale)
    }

    #[must_use]
    pub fn unmap(&self, point: Complex) -> (f64, f64) {
        unmap_point(point, self.upper_left, self.scale)
    }
}
