use std::path::Path;

use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::generate_fractal::generate_fractal::{
    GenerateFractalError, render_mandelbrot,
};
use crate::core::actions::generate_fractal::progress::RenderProgress;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::render_result::RenderResult;
use crate::core::data::viewport::Viewport;

pub const DEFAULT_IMAGE_SIZE: PixelSize = PixelSize::new(800, 600);

/// Renders one frame synchronously and hands it to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    viewport: Viewport,
    config: RenderConfig,
    size: PixelSize,
    result: Option<RenderResult>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self::with_settings(presenter, DEFAULT_IMAGE_SIZE, RenderConfig::default())
    }

    pub fn with_settings(presenter: P, size: PixelSize, config: RenderConfig) -> Self {
        Self {
            presenter,
            viewport: Viewport::default(),
            config,
            size,
            result: None,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    #[must_use]
    pub fn result(&self) -> Option<&RenderResult> {
        self.result.as_ref()
    }

    pub fn generate(&mut self) -> Result<(), GenerateFractalError> {
        info!(
            "rendering {}x{} at {} iterations on {} worker(s)",
            self.size.width,
            self.size.height,
            self.config.max_iterations(),
            self.config.worker_count()
        );

        let progress = RenderProgress::new();
        let result = render_mandelbrot(&mut self.viewport, &self.config, self.size, &progress)?;

        info!("render took {:?}", result.elapsed);

        self.result = Some(result);

        Ok(())
    }

    /// Writes the last generated frame; does nothing before `generate`.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(result) = &self.result {
            self.presenter.present(&result.raster, filepath)?
        }

        Ok(())
    }
}
