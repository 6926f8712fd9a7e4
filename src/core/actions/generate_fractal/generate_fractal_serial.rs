use crate::core::actions::generate_fractal::ports::colour_map::ColourMap;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_fractal::render_band::{FrameContext, render_band};
use crate::core::data::raster::Raster;
use crate::core::util::calculate_row_bands::RowBand;

/// Fills the whole raster on the calling thread, top row first.
pub(crate) fn generate_fractal_serial<Alg, CMap>(
    raster: &mut Raster,
    frame: &FrameContext<'_, Alg, CMap>,
) where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    let band = RowBand {
        first_row: 0,
        rows: raster.size().height,
    };

    render_band(raster.pixels_mut(), band, frame);
}
