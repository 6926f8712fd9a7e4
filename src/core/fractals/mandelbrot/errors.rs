use std::{error::Error, fmt};

#[derive(Debug, PartialEq, Eq)]
pub enum MandelbrotError {
    TooFewIterations { max_iterations: u32, minimum: u32 },
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewIterations {
                max_iterations,
                minimum,
            } => {
                write!(
                    f,
                    "maximum iterations must be at least {}, got {}",
                    minimum, max_iterations
                )
            }
        }
    }
}

impl Error for MandelbrotError {}
