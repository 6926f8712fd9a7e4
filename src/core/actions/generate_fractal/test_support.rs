//! Stubs shared by the generation tests.

use crate::core::actions::generate_fractal::ports::colour_map::ColourMap;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;

/// Passes the plane point straight through.
#[derive(Debug)]
pub(crate) struct StubAlgorithm;

impl FractalAlgorithm for StubAlgorithm {
    type Success = Complex;

    fn compute(&self, point: Complex) -> Complex {
        point
    }
}

/// Encodes a plane point with small integer coordinates as a colour: the real
/// part in red, the negated imaginary part in green.
#[derive(Debug)]
pub(crate) struct StubColourMap;

impl StubColourMap {
    pub(crate) fn pack(real: i32, imag: i32) -> u32 {
        Colour {
            r: real as u8,
            g: imag as u8,
            b: 0xAA,
        }
        .to_packed()
    }
}

impl ColourMap<Complex> for StubColourMap {
    fn map(&self, value: Complex) -> Colour {
        Colour {
            r: value.real.round() as i32 as u8,
            g: (-value.imag).round() as i32 as u8,
            b: 0xAA,
        }
    }

    fn display_name(&self) -> &str {
        "Stub"
    }
}
