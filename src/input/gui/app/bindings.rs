use crate::core::explorer::command::ExplorerCommand;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

/// Turns raw window input into explorer commands.
///
/// Arrow up/down cycle the variant, `J` toggles Julia mode, `R` resets the view.
/// The wheel zooms, left-drag pans and moving the pointer with Ctrl held picks the
/// Julia seed (switching Julia mode on).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct InputBindings {
    ctrl_held: bool,
    left_button_held: bool,
    last_cursor: Option<(f64, f64)>,
}

impl InputBindings {
    pub fn on_key(&mut self, key_code: KeyCode, state: ElementState) -> Option<ExplorerCommand> {
        if state != ElementState::Pressed {
            return None;
        }

        match key_code {
            KeyCode::ArrowUp => Some(ExplorerCommand::ChangeVariant(1)),
            KeyCode::ArrowDown => Some(ExplorerCommand::ChangeVariant(-1)),
            KeyCode::KeyJ => Some(ExplorerCommand::ToggleJulia),
            KeyCode::KeyR => Some(ExplorerCommand::ResetView),
            _ => None,
        }
    }

    pub fn on_ctrl_changed(&mut self, ctrl_held: bool) {
        self.ctrl_held = ctrl_held;
    }

    pub fn on_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.left_button_held = state == ElementState::Pressed;
        }
    }

    pub fn on_cursor_moved(&mut self, x: f64, y: f64) -> Option<ExplorerCommand> {
        let previous = self.last_cursor.replace((x, y));

        if self.ctrl_held {
            return Some(ExplorerCommand::SetJuliaSeedFromPointer {
                device_x: x,
                device_y: y,
                force_enable: true,
            });
        }

        match previous {
            Some((last_x, last_y)) if self.left_button_held => Some(ExplorerCommand::Pan {
                device_dx: x - last_x,
                device_dy: y - last_y,
            }),
            _ => None,
        }
    }

    pub fn on_cursor_left(&mut self) {
        self.last_cursor = None;
    }

    /// Scrolling towards the user zooms out, away zooms in.
    pub fn on_wheel(&mut self, delta: MouseScrollDelta) -> Option<ExplorerCommand> {
        let delta_y = match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(y),
            MouseScrollDelta::PixelDelta(position) => position.y,
        };

        (delta_y != 0.0).then_some(ExplorerCommand::Zoom(-delta_y))
    }

    /// Forgets held buttons and modifiers, e.g. after focus loss.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
