use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::fractals::mandelbrot::colour_maps::coefficient_banding::ColourCoefficients;

pub const DEFAULT_MAX_ITERATIONS: u32 = 500;
pub const DEFAULT_COEFFICIENTS: ColourCoefficients = ColourCoefficients::new(10, 15, 20);

/// Visual centre of the classic Mandelbrot silhouette.
pub const DEFAULT_CENTER: Complex = Complex::new(-0.75, 0.0);

/// Zoom-out step applied by the explorer's zoom-out action.
pub const ZOOM_OUT_FACTOR: f64 = 4.0;

/// Plane region that a fresh viewport fits into the image.
pub(crate) fn default_region() -> ComplexRect {
    ComplexRect::new(Complex::new(-2.05, 1.3), Complex::new(0.55, -1.3))
        .expect("default fractal region is valid")
}
