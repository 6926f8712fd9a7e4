use crate::core::actions::generate_fractal::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

/// Per-channel multipliers for the banding palette. Any `i32` is valid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ColourCoefficients {
    pub kr: i32,
    pub kg: i32,
    pub kb: i32,
}

impl ColourCoefficients {
    #[must_use]
    pub const fn new(kr: i32, kg: i32, kb: i32) -> Self {
        Self { kr, kg, kb }
    }

    /// Non-negative random coefficients.
    #[must_use]
    pub fn random() -> Self {
        Self {
            kr: fastrand::i32(0..),
            kg: fastrand::i32(0..),
            kb: fastrand::i32(0..),
        }
    }
}

#[inline]
fn channel(steps: u32, coefficient: i32) -> u8 {
    // Wraps on overflow; the Euclidean remainder keeps negative products in 0..255.
    (steps as i32).wrapping_mul(coefficient).rem_euclid(255) as u8
}

/// Packed `0x00RRGGBB` colour for an escape time; interior points are black.
#[must_use]
pub fn map_colour(steps: u32, max_iterations: u32, coefficients: ColourCoefficients) -> u32 {
    if steps == max_iterations {
        return Colour::BLACK.to_packed();
    }

    Colour {
        r: channel(steps, coefficients.kr),
        g: channel(steps, coefficients.kg),
        b: channel(steps, coefficients.kb),
    }
    .to_packed()
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CoefficientBanding {
    max_iterations: u32,
    coefficients: ColourCoefficients,
}

impl CoefficientBanding {
    #[must_use]
    pub fn new(max_iterations: u32, coefficients: ColourCoefficients) -> Self {
        Self {
            max_iterations,
            coefficients,
        }
    }
}

impl ColourMap<u32> for CoefficientBanding {
    #[inline]
    fn map(&self, steps: u32) -> Colour {
        Colour::from_packed(map_colour(steps, self.max_iterations, self.coefficients))
    }

    fn display_name(&self) -> &str {
        "Coefficient banding"
    }
}
