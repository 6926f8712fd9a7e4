use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;

use crate::core::fractals::mandelbrot::algorithm::{MIN_MAX_ITERATIONS, MandelbrotAlgorithm};
use crate::core::fractals::mandelbrot::colour_maps::coefficient_banding::{
    CoefficientBanding, ColourCoefficients,
};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_COEFFICIENTS, DEFAULT_MAX_ITERATIONS,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderConfigError {
    ZeroResolutionMultiplier,
    ZeroParallelismDegree,
}

impl fmt::Display for RenderConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroResolutionMultiplier => {
                write!(f, "resolution multiplier must be greater than zero")
            }
            Self::ZeroParallelismDegree => {
                write!(f, "parallelism degree must be greater than zero")
            }
        }
    }
}

impl Error for RenderConfigError {}

fn available_workers() -> NonZeroU32 {
    std::thread::available_parallelism()
        .ok()
        .and_then(|n| NonZeroU32::new(n.get() as u32))
        .unwrap_or(NonZeroU32::MIN)
}

/// Render settings captured by value at the start of each render.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    max_iterations: u32,
    resolution_multiplier: NonZeroU32,
    parallelism_degree: NonZeroU32,
    parallel_mode: bool,
    coefficients: ColourCoefficients,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            resolution_multiplier: NonZeroU32::MIN,
            parallelism_degree: available_workers(),
            parallel_mode: true,
            coefficients: DEFAULT_COEFFICIENTS,
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Values below the minimum are clamped up to it.
    pub fn set_max_iterations(&mut self, max_iterations: u32) {
        self.max_iterations = max_iterations.max(MIN_MAX_ITERATIONS);
    }

    #[must_use]
    pub fn resolution_multiplier(&self) -> u32 {
        self.resolution_multiplier.get()
    }

    pub fn set_resolution_multiplier(&mut self, multiplier: u32) -> Result<(), RenderConfigError> {
        self.resolution_multiplier =
            NonZeroU32::new(multiplier).ok_or(RenderConfigError::ZeroResolutionMultiplier)?;
        Ok(())
    }

    #[must_use]
    pub fn parallelism_degree(&self) -> u32 {
        self.parallelism_degree.get()
    }

    pub fn set_parallelism_degree(&mut self, degree: u32) -> Result<(), RenderConfigError> {
        self.parallelism_degree =
            NonZeroU32::new(degree).ok_or(RenderConfigError::ZeroParallelismDegree)?;
        Ok(())
    }

    #[must_use]
    pub fn parallel_mode(&self) -> bool {
        self.parallel_mode
    }

    pub fn set_parallel_mode(&mut self, parallel_mode: bool) {
        self.parallel_mode = parallel_mode;
    }

    #[must_use]
    pub fn coefficients(&self) -> ColourCoefficients {
        self.coefficients
    }

    pub fn set_coefficients(&mut self, coefficients: ColourCoefficients) {
        self.coefficients = coefficients;
    }

    pub fn randomize_palette(&mut self) {
        self.coefficients = ColourCoefficients::random();
    }

    /// Workers a render will use: the parallelism degree, or one when
    /// parallel mode is off.
    #[must_use]
    pub fn worker_count(&self) -> NonZeroU32 {
        if self.parallel_mode {
            self.parallelism_degree
        } else {
            NonZeroU32::MIN
        }
    }

    pub fn algorithm(&self) -> Result<MandelbrotAlgorithm, MandelbrotError> {
        MandelbrotAlgorithm::new(self.max_iterations)
    }

    #[must_use]
    pub fn colour_map(&self) -> CoefficientBanding {
        CoefficientBanding::new(self.max_iterations, self.coefficients)
    }
}
