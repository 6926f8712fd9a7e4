use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// A rectangle on the complex plane, oriented the way it is displayed:
/// the imaginary part decreases from the upper edge to the lower edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    upper_left: Complex,
    lower_right: Complex,
}

impl ComplexRect {
    pub fn new(upper_left: Complex, lower_right: Complex) -> Result<Self, ComplexRectError> {
        let width = lower_right.real - upper_left.real;
        let height = upper_left.imag - lower_right.imag;

        if width <= 0.0 || height <= 0.0 {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            upper_left,
            lower_right,
        })
    }

    #[must_use]
    pub fn upper_left(&self) -> Complex {
        self.upper_left
    }

    #[must_use]
    pub fn lower_right(&self) -> Complex {
        self.lower_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.lower_right.real - self.upper_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.upper_left.imag - self.lower_right.imag
    }
}
