use std::sync::Arc;
use std::time::Duration;

use egui::Context as EguiContext;

use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;

pub trait GuiPresenterPort {
    /// The sink the render worker delivers frames to.
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
    fn last_render_duration(&self) -> Option<Duration>;
    fn last_error_message(&self) -> Option<&str>;
}
