/// User events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// The render worker finished a frame; the window should redraw to show it.
    Wake,
}
