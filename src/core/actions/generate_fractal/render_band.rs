use crate::core::actions::generate_fractal::ports::colour_map::ColourMap;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_fractal::progress::RenderProgress;
use crate::core::data::point::Point;
use crate::core::util::calculate_row_bands::RowBand;
use crate::core::util::viewport_mapping::PixelMapping;

/// Everything a worker needs to turn pixels into colours. Shared read-only
/// across workers.
pub(crate) struct FrameContext<'a, Alg, CMap> {
    pub mapping: PixelMapping,
    pub width: u32,
    pub algorithm: &'a Alg,
    pub colour_map: &'a CMap,
    pub progress: &'a RenderProgress,
}

/// Computes every pixel of `band` into `pixels`, which must be exactly that
/// band's rows of the raster. Progress is reported every
/// [`RenderProgress::step`] pixels, with any remainder at the end of the band.
pub(crate) fn render_band<Alg, CMap>(
    pixels: &mut [u32],
    band: RowBand,
    frame: &FrameContext<'_, Alg, CMap>,
) where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    debug_assert_eq!(pixels.len(), band.rows as usize * frame.width as usize);

    let step = frame.progress.step();
    let mut pending = 0;

    for (row_offset, row) in pixels.chunks_exact_mut(frame.width as usize).enumerate() {
        let y = (band.first_row as usize + row_offset) as i32;

        for (x, slot) in row.iter_mut().enumerate() {
            let point = frame.mapping.map(Point { x: x as i32, y });
            *slot = frame.colour_map.map(frame.algorithm.compute(point)).to_packed();

            pending += 1;
            if pending == step {
                frame.progress.advance(pending);
                pending = 0;
            }
        }
    }

    if pending > 0 {
        frame.progress.advance(pending);
    }
}
