use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::controller::ControllerError;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::generate_fractal::generate_fractal::{
    GenerateFractalError, render_mandelbrot_on,
};
use crate::core::actions::generate_fractal::progress::RenderProgress;
use crate::core::actions::generate_fractal::worker_pool::{WorkerPool, refresh_worker_pool};
use crate::core::data::pixel_size::DisplayGeometry;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::render_result::RenderResult;
use crate::core::data::selection_rect::SelectionRect;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_maps::coefficient_banding::ColourCoefficients;
use log::{debug, warn};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

#[derive(Debug)]
struct Session {
    viewport: Viewport,
    config: RenderConfig,
}

struct SharedState {
    session: Mutex<Session>,
    ready: AtomicBool,
    progress: RenderProgress,
    last_render_time: Mutex<Option<Duration>>,
    generation: AtomicU64,
    latest_request: Mutex<Option<(u64, DisplayGeometry)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Runs one render at a time on a background thread.
///
/// `request_render` returns immediately; the frame arrives later through the
/// presenter port. Until the presenter has taken it, `is_ready` is false and
/// further render requests or viewport changes are rejected with
/// [`ControllerError::Busy`].
/// Settings changes are always accepted and apply to the next render.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn InteractiveControllerPresenterPort>) -> Self {
        Self::with_config(presenter_port, RenderConfig::default())
    }

    pub fn with_config(
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
        config: RenderConfig,
    ) -> Self {
        let shared = Arc::new(SharedState {
            session: Mutex::new(Session {
                viewport: Viewport::default(),
                config,
            }),
            ready: AtomicBool::new(true),
            progress: RenderProgress::new(),
            last_render_time: Mutex::new(None),
            generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Starts rendering the current viewport for a display of `geometry`.
    ///
    /// Returns the generation number the resulting event will carry.
    pub fn request_render(&self, geometry: DisplayGeometry) -> Result<u64, ControllerError> {
        self.shared
            .ready
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ControllerError::Busy)?;

        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = lock(&self.shared.latest_request);
            *guard = Some((generation, geometry));
        }

        self.shared.wake.notify_one();

        Ok(generation)
    }

    /// Percentage of the in-flight render completed; 0 when idle.
    #[must_use]
    pub fn progress(&self) -> u8 {
        self.shared.progress.percent()
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.shared.ready.load(Ordering::Acquire)
    }

    /// Compute time of the most recent successful render.
    #[must_use]
    pub fn last_render_time(&self) -> Option<Duration> {
        *lock(&self.shared.last_render_time)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        lock(&self.shared.session).viewport
    }

    pub fn reset_viewport(&self) -> Result<(), ControllerError> {
        self.with_idle_viewport(|viewport| {
            viewport.reset_to_default();
            Ok(())
        })
    }

    /// Zooms into `selection`; `Ok(false)` means the selection was empty and
    /// nothing changed.
    pub fn zoom_in(
        &self,
        geometry: DisplayGeometry,
        selection: SelectionRect,
    ) -> Result<bool, ControllerError> {
        self.with_idle_viewport(|viewport| Ok(viewport.zoom_in(geometry, selection)))
    }

    pub fn zoom_out(&self, factor: f64) -> Result<(), ControllerError> {
        self.with_idle_viewport(|viewport| Ok(viewport.zoom_out(factor)?))
    }

    #[must_use]
    pub fn config(&self) -> RenderConfig {
        lock(&self.shared.session).config
    }

    pub fn set_max_iterations(&self, max_iterations: u32) {
        lock(&self.shared.session).config.set_max_iterations(max_iterations);
    }

    pub fn set_resolution_multiplier(&self, multiplier: u32) -> Result<(), ControllerError> {
        Ok(lock(&self.shared.session)
            .config
            .set_resolution_multiplier(multiplier)?)
    }

    pub fn set_parallelism_degree(&self, degree: u32) -> Result<(), ControllerError> {
        Ok(lock(&self.shared.session)
            .config
            .set_parallelism_degree(degree)?)
    }

    pub fn set_parallel_mode(&self, parallel_mode: bool) {
        lock(&self.shared.session).config.set_parallel_mode(parallel_mode);
    }

    pub fn set_coefficients(&self, coefficients: ColourCoefficients) {
        lock(&self.shared.session).config.set_coefficients(coefficients);
    }

    /// Picks new random palette coefficients and returns them.
    pub fn randomize_palette(&self) -> ColourCoefficients {
        let mut session = lock(&self.shared.session);
        session.config.randomize_palette();
        session.config.coefficients()
    }

    pub fn shutdown(&mut self) {
        {
            // Held so the worker cannot miss the wake-up between its check and its wait.
            let _guard = lock(&self.shared.latest_request);
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    fn with_idle_viewport<R>(
        &self,
        change: impl FnOnce(&mut Viewport) -> Result<R, ControllerError>,
    ) -> Result<R, ControllerError> {
        let mut session = lock(&self.shared.session);

        if !self.is_ready() {
            return Err(ControllerError::Busy);
        }

        change(&mut session.viewport)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        // Lives as long as the worker thread; rebuilt only when the worker count changes.
        let mut workers: Option<WorkerPool> = None;

        loop {
            let (generation, geometry) = {
                let mut guard = lock(&shared.latest_request);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let event = Self::render(shared, &mut workers, generation, geometry);

            shared.progress.reset();
            shared.presenter_port.present(event);
            shared.ready.store(true, Ordering::Release);
        }
    }

    fn render(
        shared: &SharedState,
        workers: &mut Option<WorkerPool>,
        generation: u64,
        geometry: DisplayGeometry,
    ) -> RenderEvent {
        let (mut viewport, config) = {
            let session = lock(&shared.session);
            (session.viewport, session.config)
        };

        debug!("render {} started for {:?}", generation, geometry);

        let result = Self::render_on_cached_pool(
            workers,
            &mut viewport,
            &config,
            geometry,
            &shared.progress,
        );

        // Keeps a scale fitted on first render.
        lock(&shared.session).viewport = viewport;

        match result {
            Ok(result) => {
                *lock(&shared.last_render_time) = Some(result.elapsed);

                RenderEvent::Frame(FrameData {
                    generation,
                    raster: result.raster,
                    elapsed: result.elapsed,
                })
            }
            Err(err) => {
                warn!("render {} failed: {}", generation, err);

                RenderEvent::Error(RenderError {
                    generation,
                    message: err.to_string(),
                })
            }
        }
    }

    fn render_on_cached_pool(
        workers: &mut Option<WorkerPool>,
        viewport: &mut Viewport,
        config: &RenderConfig,
        geometry: DisplayGeometry,
        progress: &RenderProgress,
    ) -> Result<RenderResult, GenerateFractalError> {
        let workers = refresh_worker_pool(workers, config.worker_count())?;

        render_mandelbrot_on(workers, viewport, config, geometry.pixel_size(), progress)
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
