use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const MIN_MAX_ITERATIONS: u32 = 2;

/// Escape time of `point` under z ← z² + c.
///
/// Returns the 0-based iteration at which |z|² first exceeded 4, or
/// `max_iterations` when the orbit stayed bounded for the whole budget.
#[must_use]
pub fn escape_time(point: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = z * z + point;
        if z.magnitude_squared() > 4.0 {
            return iteration;
        }
    }

    max_iterations
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations < MIN_MAX_ITERATIONS {
            return Err(MandelbrotError::TooFewIterations {
                max_iterations,
                minimum: MIN_MAX_ITERATIONS,
            });
        }

        Ok(Self { max_iterations })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    #[inline]
    fn compute(&self, point: Complex) -> u32 {
        escape_time(point, self.max_iterations)
    }
}
