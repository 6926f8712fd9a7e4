use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

use crate::core::actions::generate_fractal::ports::colour_map::ColourMap;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_fractal::render_band::{FrameContext, render_band};
use crate::core::data::raster::Raster;
use crate::core::util::calculate_row_bands::RowBand;

/// Builds a pool with one named thread per worker.
pub(crate) fn build_worker_pool(workers: usize) -> Result<ThreadPool, ThreadPoolBuildError> {
    ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|index| format!("fractal-worker-{}", index))
        .build()
}

/// Cuts `pixels` into one disjoint mutable slice per band.
fn split_into_bands<'a>(
    mut pixels: &'a mut [u32],
    bands: &[RowBand],
    width: u32,
) -> Vec<(RowBand, &'a mut [u32])> {
    let mut slices = Vec::with_capacity(bands.len());

    for &band in bands {
        let (head, tail) =
            std::mem::take(&mut pixels).split_at_mut(band.rows as usize * width as usize);
        slices.push((band, head));
        pixels = tail;
    }

    slices
}

/// Fills the raster on `pool`, one band per worker.
///
/// Each worker owns its band's slice of the raster outright, so pixel writes
/// need no locking; only the progress counter is shared.
pub(crate) fn generate_fractal_parallel_rayon<Alg, CMap>(
    pool: &ThreadPool,
    raster: &mut Raster,
    bands: &[RowBand],
    frame: &FrameContext<'_, Alg, CMap>,
) where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    let width = raster.size().width;
    let band_slices = split_into_bands(raster.pixels_mut(), bands, width);

    pool.install(|| {
        band_slices
            .into_par_iter()
            .for_each(|(band, pixels)| render_band(pixels, band, frame));
    });
}
