use std::error::Error;
use std::fmt;

use crate::core::data::complex::Complex;
use crate::core::data::pixel_size::{DisplayGeometry, PixelSize};
use crate::core::data::point::Point;
use crate::core::data::selection_rect::SelectionRect;
use crate::core::fractals::mandelbrot::mandelbrot_config::{DEFAULT_CENTER, default_region};
use crate::core::util::viewport_mapping::{PixelMapping, calc_scale, find_corner, map_pixel};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidZoomFactor(f64),
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoomFactor(factor) => {
                write!(f, "zoom factor must be positive and finite, got {}", factor)
            }
        }
    }
}

impl Error for ViewportError {}

/// Which part of the complex plane is visible, and at what pixel density.
///
/// A fresh viewport has no scale yet; it is fitted to the default region the
/// first time an image size is known (see [`Viewport::ensure_scale`]).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    scale: Option<f64>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            scale: None,
        }
    }
}

impl Viewport {
    #[must_use]
    pub fn new(center: Complex, scale: f64) -> Self {
        Self {
            center,
            scale: Some(scale),
        }
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    /// Pixels per plane unit, or `None` until the first render fits the viewport.
    #[must_use]
    pub fn scale(&self) -> Option<f64> {
        self.scale
    }

    pub fn reset_to_default(&mut self) {
        *self = Self::default();
    }

    /// Fits the default region into `size` if no scale has been derived yet.
    ///
    /// This is the only place a scale comes from an image size rather than
    /// from a previous scale. Empty sizes leave the viewport untouched.
    pub fn ensure_scale(&mut self, size: PixelSize) -> Option<f64> {
        if self.scale.is_none() && !size.is_empty() {
            self.scale = Some(calc_scale(size, default_region()));
        }

        self.scale
    }

    /// Mapping for a raster `multiplier` times denser than `size`, showing the
    /// same plane window.
    #[must_use]
    pub fn mapping(&self, size: PixelSize, multiplier: u32) -> Option<PixelMapping> {
        let scale = self.scale? * f64::from(multiplier);

        Some(PixelMapping::new(size.scaled(multiplier), self.center, scale))
    }

    /// Re-centres on the middle of `selection` and zooms in by the larger of
    /// the two axis ratios between the image and the selection.
    ///
    /// The selection fills the image along its relatively narrower axis.
    /// Returns `false` (and leaves the viewport alone) for empty selections or
    /// empty images.
    pub fn zoom_in(&mut self, geometry: DisplayGeometry, selection: SelectionRect) -> bool {
        if selection.is_degenerate() {
            return false;
        }

        let size = geometry.pixel_size();
        if size.is_empty() {
            return false;
        }
        let Some(scale) = self.ensure_scale(size) else {
            return false;
        };

        let upper_left = find_corner(size, self.center, scale);
        let (center_x, center_y) = selection.center();
        let selected_pixel = Point {
            x: (center_x * geometry.dpi.x).round() as i32,
            y: (center_y * geometry.dpi.y).round() as i32,
        };

        let ratio = (geometry.width / selection.width).max(geometry.height / selection.height);

        self.center = map_pixel(selected_pixel, upper_left, scale);
        self.scale = Some(ratio * scale);
        true
    }

    /// Divides the scale by `factor`, keeping the centre.
    ///
    /// A viewport that has not been fitted yet has nothing to divide and is
    /// left as is.
    pub fn zoom_out(&mut self, factor: f64) -> Result<(), ViewportError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(ViewportError::InvalidZoomFactor(factor));
        }

        if let Some(scale) = self.scale.as_mut() {
            *scale /= factor;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_size::DpiScale;

    const EPSILON: f64 = 1e-9;

    fn fitted(size: PixelSize) -> Viewport {
        let mut viewport = Viewport::default();
        viewport.ensure_scale(size);
        viewport
    }

    #[test]
    fn test_default_viewport_is_unscaled_at_default_center() {
        let viewport = Viewport::default();

        assert_eq!(viewport.center(), Complex::new(-0.75, 0.0));
        assert_eq!(viewport.scale(), None);
        assert_eq!(viewport.mapping(PixelSize::new(10, 10), 1), None);
    }

    #[test]
    fn test_ensure_scale_fits_default_region() {
        let viewport = fitted(PixelSize::new(100, 100));

        let scale = viewport.scale().unwrap();
        assert!((scale - 100.0 / 2.6).abs() < EPSILON);
    }

    #[test]
    fn test_ensure_scale_keeps_existing_scale() {
        let mut viewport = Viewport::new(Complex::ZERO, 1234.0);

        assert_eq!(viewport.ensure_scale(PixelSize::new(100, 100)), Some(1234.0));
    }

    #[test]
    fn test_ensure_scale_ignores_empty_sizes() {
        let mut viewport = Viewport::default();

        assert_eq!(viewport.ensure_scale(PixelSize::new(0, 100)), None);
    }

    #[test]
    fn test_reset_returns_to_uninitialized_state() {
        let mut viewport = Viewport::new(Complex::new(0.3, 0.5), 9000.0);

        viewport.reset_to_default();

        assert_eq!(viewport, Viewport::default());
    }

    #[test]
    fn test_zoom_in_recentres_on_selection_center() {
        let size = PixelSize::new(200, 100);
        let geometry = DisplayGeometry::from_pixels(size);
        let mut viewport = fitted(size);
        let before = viewport.mapping(size, 1).unwrap();
        let selection = SelectionRect::new(120.0, 10.0, 40.0, 20.0);
        let expected_center = before.map(Point { x: 140, y: 20 });

        assert!(viewport.zoom_in(geometry, selection));

        assert_eq!(viewport.center(), expected_center);
        // The new image centre pixel now shows the selected point.
        let after = viewport.mapping(size, 1).unwrap();
        let shown = after.map(Point { x: 100, y: 50 });
        assert!((shown.real - expected_center.real).abs() < EPSILON);
        assert!((shown.imag - expected_center.imag).abs() < EPSILON);
    }

    #[test]
    fn test_zoom_in_uses_larger_axis_ratio() {
        let size = PixelSize::new(200, 100);
        let mut viewport = Viewport::new(Complex::ZERO, 10.0);

        // Width ratio 200 / 50 = 4, height ratio 100 / 10 = 10.
        viewport.zoom_in(
            DisplayGeometry::from_pixels(size),
            SelectionRect::new(0.0, 0.0, 50.0, 10.0),
        );

        assert_eq!(viewport.scale(), Some(100.0));
    }

    #[test]
    fn test_zoom_in_fills_image_along_limiting_axis() {
        let size = PixelSize::new(300, 200);
        let geometry = DisplayGeometry::from_pixels(size);
        let mut viewport = fitted(size);
        let before = viewport.mapping(size, 1).unwrap();
        let selection_top = before.map(Point { x: 75, y: 40 });
        let selection_bottom = before.map(Point { x: 75, y: 60 });

        // Height ratio 200 / 20 beats width ratio 300 / 90.
        viewport.zoom_in(geometry, SelectionRect::new(30.0, 40.0, 90.0, 20.0));
        let after = viewport.mapping(size, 1).unwrap();

        let (_, top) = after.unmap(selection_top);
        let (_, bottom) = after.unmap(selection_bottom);
        assert!(top.abs() < 1e-6, "top edge at {}", top);
        assert!((bottom - 200.0).abs() < 1e-6, "bottom edge at {}", bottom);
    }

    #[test]
    fn test_zoom_in_applies_dpi_scaling() {
        let geometry = DisplayGeometry::new(100.0, 50.0, DpiScale { x: 2.0, y: 2.0 });
        let mut viewport = Viewport::new(Complex::ZERO, 10.0);
        let before = viewport.mapping(geometry.pixel_size(), 1).unwrap();

        viewport.zoom_in(geometry, SelectionRect::new(10.0, 10.0, 10.0, 10.0));

        // Logical centre (15, 15) is physical pixel (30, 30).
        assert_eq!(viewport.center(), before.map(Point { x: 30, y: 30 }));
        assert_eq!(viewport.scale(), Some(100.0));
    }

    #[test]
    fn test_zoom_in_on_unscaled_viewport_fits_first() {
        let size = PixelSize::new(100, 100);
        let mut viewport = Viewport::default();

        viewport.zoom_in(
            DisplayGeometry::from_pixels(size),
            SelectionRect::new(25.0, 25.0, 50.0, 50.0),
        );

        let scale = viewport.scale().unwrap();
        assert!((scale - 2.0 * 100.0 / 2.6).abs() < EPSILON);
        assert!((viewport.center().real - (-0.75)).abs() < EPSILON);
        assert!(viewport.center().imag.abs() < EPSILON);
    }

    #[test]
    fn test_degenerate_zoom_in_is_a_no_op() {
        let size = PixelSize::new(100, 100);
        let mut viewport = fitted(size);
        let before = viewport;

        assert!(!viewport.zoom_in(
            DisplayGeometry::from_pixels(size),
            SelectionRect::new(10.0, 10.0, 0.0, 25.0)
        ));
        assert!(!viewport.zoom_in(
            DisplayGeometry::from_pixels(PixelSize::new(0, 0)),
            SelectionRect::new(10.0, 10.0, 5.0, 5.0)
        ));
        assert_eq!(viewport, before);
    }

    #[test]
    fn test_zoom_out_divides_scale_and_keeps_center() {
        let mut viewport = Viewport::new(Complex::new(0.1, 0.2), 400.0);

        viewport.zoom_out(4.0).unwrap();

        assert_eq!(viewport.scale(), Some(100.0));
        assert_eq!(viewport.center(), Complex::new(0.1, 0.2));
    }

    #[test]
    fn test_zoom_out_then_inverse_factor_restores_scale() {
        let mut viewport = fitted(PixelSize::new(640, 480));
        let original = viewport.scale().unwrap();

        viewport.zoom_out(4.0).unwrap();
        viewport.zoom_out(0.25).unwrap();

        assert!((viewport.scale().unwrap() - original).abs() < EPSILON * original);
    }

    #[test]
    fn test_zoom_out_rejects_invalid_factors() {
        let mut viewport = Viewport::new(Complex::ZERO, 10.0);

        for factor in [0.0, -4.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                viewport.zoom_out(factor),
                Err(ViewportError::InvalidZoomFactor(_))
            ));
        }
        assert_eq!(viewport.scale(), Some(10.0));
    }

    #[test]
    fn test_zoom_out_on_unscaled_viewport_is_a_no_op() {
        let mut viewport = Viewport::default();

        viewport.zoom_out(4.0).unwrap();

        assert_eq!(viewport, Viewport::default());
    }

    #[test]
    fn test_mapping_with_multiplier_shows_same_window() {
        let size = PixelSize::new(80, 60);
        let viewport = fitted(size);

        let plain = viewport.mapping(size, 1).unwrap();
        let oversampled = viewport.mapping(size, 3).unwrap();

        assert_eq!(plain.upper_left(), oversampled.upper_left());
        let plain_far = plain.map(Point { x: 80, y: 60 });
        let oversampled_far = oversampled.map(Point { x: 240, y: 180 });
        assert!((plain_far.real - oversampled_far.real).abs() < EPSILON);
        assert!((plain_far.imag - oversampled_far.imag).abs() < EPSILON);
    }
}
