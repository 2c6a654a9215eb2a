use crate::controllers::interactive::events::render_event::RenderEvent;

/// Receives render results on the controller's worker thread.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
