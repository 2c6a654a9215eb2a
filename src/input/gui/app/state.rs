use crate::controllers::interactive::data::frame_request::FrameRequest;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::explorer::command::ExplorerCommand;
use crate::core::explorer::state::ExplorerState;
use std::sync::Arc;

pub struct GuiAppState {
    pub explorer: ExplorerState,
    pub base_colour_text: String,
    pub blend_colour_text: String,
    pub colour_error: Option<String>,
    last_submitted_request: Option<Arc<FrameRequest>>,
    pub latest_submitted_generation: u64,
}

impl GuiAppState {
    pub fn new(explorer: ExplorerState) -> Self {
        Self {
            base_colour_text: explorer.ramp().base.to_hex(),
            blend_colour_text: explorer.ramp().blend.to_hex(),
            explorer,
            colour_error: None,
            last_submitted_request: None,
            latest_submitted_generation: 0,
        }
    }

    #[must_use]
    pub fn build_frame_request(&self, pixel_rect: PixelRect) -> FrameRequest {
        FrameRequest {
            pixel_rect,
            snapshot: self.explorer.snapshot(),
        }
    }

    #[must_use]
    pub fn should_submit(&self, request: &FrameRequest) -> bool {
        self.last_submitted_request
            .as_ref()
            .is_none_or(|last| last.as_ref() != request)
    }

    pub fn record_submission(&mut self, request: Arc<FrameRequest>, generation: u64) {
        self.last_submitted_request = Some(request);
        self.latest_submitted_generation = generation;
    }

    /// Returns whether the command changed anything. Failures are logged by the explorer.
    pub fn apply(&mut self, command: ExplorerCommand) -> bool {
        let before = self.explorer.clone();

        self.explorer.apply(command).is_ok() && self.explorer != before
    }

    /// Commits both colour text fields. Invalid text leaves its colour unchanged and
    /// keeps the error for display. Text naming the colour already shown is skipped so
    /// the ramp keeps its exact values.
    pub fn commit_colour_text(&mut self) {
        let mut errors = Vec::new();

        if self.base_colour_text.trim() != self.explorer.ramp().base.to_hex() {
            let command = ExplorerCommand::SetBaseColourHex(self.base_colour_text.clone());
            errors.extend(self.explorer.apply(command).err());
        }

        if self.blend_colour_text.trim() != self.explorer.ramp().blend.to_hex() {
            let command = ExplorerCommand::SetBlendColourHex(self.blend_colour_text.clone());
            errors.extend(self.explorer.apply(command).err());
        }

        self.colour_error = errors.first().map(|err| err.to_string());
    }

    pub fn revert_colour_text(&mut self) {
        self.base_colour_text = self.explorer.ramp().base.to_hex();
        self.blend_colour_text = self.explorer.ramp().blend.to_hex();
        self.colour_error = None;
    }
}
