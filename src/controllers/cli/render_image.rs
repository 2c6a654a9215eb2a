use std::path::Path;
use std::time::Instant;

use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::render_frame::render_frame;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::storage::settings::ExplorerSettings;

/// Renders one frame from settings and hands it to a file presenter.
pub struct RenderImageController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> RenderImageController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn generate(&mut self, settings: &ExplorerSettings) -> Result<(), Box<dyn std::error::Error>> {
        let state = settings.into_state()?;
        let pixel_rect = PixelRect::from_size(settings.width, settings.height)?;
        let snapshot = state.snapshot();

        info!(
            "Rendering {} ({}x{}, max iterations {}, julia {})",
            snapshot.params.variant().display_name(),
            settings.width,
            settings.height,
            snapshot.params.max_iterations(),
            if snapshot.julia.enabled { "on" } else { "off" }
        );

        let start = Instant::now();
        self.buffer = Some(render_frame(pixel_rect, &snapshot)?);

        info!("Rendered in {:?}", start.elapsed());

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath.as_ref())?;
            info!("Saved to {}", filepath.as_ref().display());
        }

        Ok(())
    }
}
