use std::error::Error;
use std::fmt;
use std::time::Instant;

use log::{debug, info};
use rayon::ThreadPoolBuildError;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::generate_fractal::ports::colour_map::ColourMap;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_fractal::progress::RenderProgress;
use crate::core::actions::generate_fractal::render_band::FrameContext;
use crate::core::actions::generate_fractal::worker_pool::WorkerPool;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::raster::Raster;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::render_result::RenderResult;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::calculate_row_bands::calculate_row_bands;

#[derive(Debug)]
pub enum GenerateFractalError {
    Mandelbrot(MandelbrotError),
    ThreadPool(ThreadPoolBuildError),
}

impl fmt::Display for GenerateFractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mandelbrot(err) => write!(f, "mandelbrot settings error: {}", err),
            Self::ThreadPool(err) => write!(f, "worker pool error: {}", err),
        }
    }
}

impl Error for GenerateFractalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Mandelbrot(err) => Some(err),
            Self::ThreadPool(err) => Some(err),
        }
    }
}

impl From<MandelbrotError> for GenerateFractalError {
    fn from(err: MandelbrotError) -> Self {
        Self::Mandelbrot(err)
    }
}

impl From<ThreadPoolBuildError> for GenerateFractalError {
    fn from(err: ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err)
    }
}

/// Renders one frame of `viewport` at `pixel_size` (before oversampling).
///
/// An unfitted viewport is fitted to `pixel_size` first and keeps that scale.
/// The raster is `pixel_size` times the config's resolution multiplier and is
/// split into row bands across the config's worker count; one worker means a
/// plain pass on the calling thread. Empty sizes give an empty raster and a
/// zero elapsed time.
///
/// Builds a fresh worker pool; use [`generate_fractal_on`] to reuse one.
pub fn generate_fractal<Alg, CMap>(
    viewport: &mut Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
    config: &RenderConfig,
    pixel_size: PixelSize,
    progress: &RenderProgress,
) -> Result<RenderResult, GenerateFractalError>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    let workers = WorkerPool::new(config.worker_count())?;

    Ok(generate_fractal_on(
        &workers, viewport, algorithm, colour_map, config, pixel_size, progress,
    ))
}

/// Same as [`generate_fractal`], on an existing pool. The pool's worker count
/// takes the place of the config's.
pub fn generate_fractal_on<Alg, CMap>(
    workers: &WorkerPool,
    viewport: &mut Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
    config: &RenderConfig,
    pixel_size: PixelSize,
    progress: &RenderProgress,
) -> RenderResult
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    let multiplier = config.resolution_multiplier();
    let raster_size = pixel_size.scaled(multiplier);

    if raster_size.is_empty() {
        progress.reset();
        debug!("skipping render of empty {}x{} raster", raster_size.width, raster_size.height);
        return RenderResult::empty();
    }

    viewport.ensure_scale(pixel_size);
    let Some(mapping) = viewport.mapping(pixel_size, multiplier) else {
        progress.reset();
        return RenderResult::empty();
    };

    let bands = calculate_row_bands(workers.workers(), raster_size.height);

    let mut raster = Raster::new(raster_size);
    let frame = FrameContext {
        mapping,
        width: raster_size.width,
        algorithm,
        colour_map,
        progress,
    };

    debug!(
        "rendering {}x{} raster with {} band(s), {} around {:?} at scale {}",
        raster_size.width,
        raster_size.height,
        bands.len(),
        colour_map.display_name(),
        viewport.center(),
        mapping.scale()
    );

    progress.start(raster_size.area());
    let start = Instant::now();

    match workers.pool() {
        Some(pool) if bands.len() > 1 => {
            generate_fractal_parallel_rayon(pool, &mut raster, &bands, &frame)
        }
        _ => generate_fractal_serial(&mut raster, &frame),
    }

    let elapsed = start.elapsed();
    progress.finish();

    info!(
        "rendered {}x{} raster in {:?}",
        raster_size.width, raster_size.height, elapsed
    );

    RenderResult { raster, elapsed }
}

/// Renders with the Mandelbrot escape-time algorithm and coefficient banding
/// palette described by `config`.
pub fn render_mandelbrot(
    viewport: &mut Viewport,
    config: &RenderConfig,
    pixel_size: PixelSize,
    progress: &RenderProgress,
) -> Result<RenderResult, GenerateFractalError> {
    let workers = WorkerPool::new(config.worker_count())?;

    render_mandelbrot_on(&workers, viewport, config, pixel_size, progress)
}

pub fn render_mandelbrot_on(
    workers: &WorkerPool,
    viewport: &mut Viewport,
    config: &RenderConfig,
    pixel_size: PixelSize,
    progress: &RenderProgress,
) -> Result<RenderResult, GenerateFractalError> {
    let algorithm = config.algorithm()?;
    let colour_map = config.colour_map();

    Ok(generate_fractal_on(
        workers,
        viewport,
        &algorithm,
        &colour_map,
        config,
        pixel_size,
        progress,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::Point;
    use crate::core::fractals::mandelbrot::algorithm::escape_time;
    use crate::core::fractals::mandelbrot::colour_maps::coefficient_banding::{
        ColourCoefficients, map_colour,
    };
    use std::time::Duration;

    fn config(max_iterations: u32, workers: u32) -> RenderConfig {
        let mut config = RenderConfig::default();
        config.set_max_iterations(max_iterations);
        config.set_parallelism_degree(workers).unwrap();
        config.set_coefficients(ColourCoefficients::new(10, 15, 20));
        config
    }

    fn render(viewport: &mut Viewport, config: &RenderConfig, size: PixelSize) -> RenderResult {
        render_mandelbrot(viewport, config, size, &RenderProgress::new()).unwrap()
    }

    #[test]
    fn test_default_view_end_to_end() {
        let mut viewport = Viewport::default();
        let result = render(&mut viewport, &config(500, 4), PixelSize::new(100, 100));

        assert_eq!(result.raster.size(), PixelSize::new(100, 100));
        // The centre pixel sits on -0.75 + 0i, inside the set.
        assert_eq!(result.raster.pixel(Point { x: 50, y: 50 }), Ok(0));
        assert!(viewport.scale().is_some());
    }

    #[test]
    fn test_far_corner_escapes_within_a_couple_of_steps() {
        let size = PixelSize::new(100, 100);
        let coefficients = ColourCoefficients::new(10, 15, 20);
        let mut viewport = Viewport::default();
        let result = render(&mut viewport, &config(500, 1), size);

        let corner = Point { x: 99, y: 0 };
        let steps = escape_time(viewport.mapping(size, 1).unwrap().map(corner), 500);

        assert!(steps <= 2, "corner took {} steps", steps);
        assert_eq!(
            result.raster.pixel(corner),
            Ok(map_colour(steps, 500, coefficients))
        );
        assert_ne!(result.raster.pixel(corner), Ok(0));
    }

    #[test]
    fn test_parallel_and_serial_rasters_are_bit_identical() {
        let size = PixelSize::new(64, 48);
        let mut serial_viewport = Viewport::default();
        let serial = render(&mut serial_viewport, &config(200, 1), size);

        for workers in [2, 3, 7, 16] {
            let mut viewport = Viewport::default();
            let parallel = render(&mut viewport, &config(200, workers), size);

            assert_eq!(parallel.raster, serial.raster, "{} workers", workers);
        }
    }

    #[test]
    fn test_parallel_mode_off_matches_parallel_mode_on() {
        let size = PixelSize::new(30, 20);
        let mut on = config(100, 6);
        let mut off = on;
        off.set_parallel_mode(false);
        on.set_parallel_mode(true);

        let on_result = render(&mut Viewport::default(), &on, size);
        let off_result = render(&mut Viewport::default(), &off, size);

        assert_eq!(on_result.raster, off_result.raster);
    }

    #[test]
    fn test_every_pixel_matches_direct_evaluation() {
        let size = PixelSize::new(25, 15);
        let config = config(80, 3);
        let mut viewport = Viewport::new(Complex::new(-0.5, 0.1), 12.0);
        let result = render(&mut viewport, &config, size);
        let mapping = viewport.mapping(size, 1).unwrap();

        for y in 0..15 {
            for x in 0..25 {
                let point = mapping.map(Point { x, y });
                let expected = map_colour(escape_time(point, 80), 80, config.coefficients());

                assert_eq!(result.raster.pixel(Point { x, y }), Ok(expected));
            }
        }
    }

    #[test]
    fn test_progress_reaches_100_at_completion() {
        for size in [PixelSize::new(1, 1), PixelSize::new(7, 3), PixelSize::new(120, 90)] {
            for workers in [1, 4] {
                let progress = RenderProgress::new();

                render_mandelbrot(&mut Viewport::default(), &config(50, workers), size, &progress)
                    .unwrap();

                assert_eq!(progress.percent(), 100);
                assert_eq!(progress.completed_pixels(), size.area());
            }
        }
    }

    #[test]
    fn test_resolution_multiplier_oversamples_same_window() {
        let size = PixelSize::new(20, 10);
        let mut config = config(60, 2);
        config.set_resolution_multiplier(3).unwrap();
        let mut viewport = Viewport::default();

        let result = render(&mut viewport, &config, size);

        assert_eq!(result.raster.size(), PixelSize::new(60, 30));
        assert_eq!(result.raster.pixels().len(), 1800);
        // Scale is fitted to the logical size, not the oversampled one.
        let mut plain = Viewport::default();
        plain.ensure_scale(size);
        assert_eq!(viewport.scale(), plain.scale());
    }

    #[test]
    fn test_lazy_scale_is_kept_between_renders() {
        let mut viewport = Viewport::default();
        render(&mut viewport, &config(20, 1), PixelSize::new(100, 50));
        let first_scale = viewport.scale();

        render(&mut viewport, &config(20, 1), PixelSize::new(400, 400));

        assert_eq!(viewport.scale(), first_scale);
    }

    #[test]
    fn test_zero_area_gives_empty_result() {
        let progress = RenderProgress::new();
        let mut viewport = Viewport::default();

        for size in [PixelSize::new(0, 10), PixelSize::new(10, 0), PixelSize::new(0, 0)] {
            let result =
                render_mandelbrot(&mut viewport, &config(50, 4), size, &progress).unwrap();

            assert!(result.raster.is_empty());
            assert_eq!(result.elapsed, Duration::ZERO);
        }
        assert_eq!(viewport.scale(), None);
        assert_eq!(progress.percent(), 0);
    }

    #[test]
    fn test_shared_pool_renders_same_frame_as_fresh_pool() {
        let size = PixelSize::new(40, 30);
        let config = config(100, 3);
        let workers = WorkerPool::new(config.worker_count()).unwrap();
        let fresh = render(&mut Viewport::default(), &config, size);

        for _ in 0..3 {
            let shared = render_mandelbrot_on(
                &workers,
                &mut Viewport::default(),
                &config,
                size,
                &RenderProgress::new(),
            )
            .unwrap();

            assert_eq!(shared.raster, fresh.raster);
        }
    }

    #[test]
    fn test_error_display() {
        let err = GenerateFractalError::from(MandelbrotError::TooFewIterations {
            max_iterations: 1,
            minimum: 2,
        });

        assert_eq!(
            err.to_string(),
            "mandelbrot settings error: maximum iterations must be at least 2, got 1"
        );
        assert!(err.source().is_some());
    }
}
