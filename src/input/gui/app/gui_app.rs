use std::sync::Arc;

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{debug, error, warn};
use winit::error::EventLoopError;
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::Window;

use crate::controllers::interactive::InteractiveController;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::explorer::command::ExplorerCommand;
use crate::core::explorer::state::ExplorerState;
use crate::core::fractals::escape_time::variant::FractalVariant;
use crate::input::gui::app::bindings::InputBindings;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::GuiAppState;
use crate::input::gui::events::GuiEvent;

const PANEL_MAX_ITERATIONS: u32 = 5000;

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    scale_factor: f64,
    presenter: T,
    controller: InteractiveController,
    state: GuiAppState,
    bindings: InputBindings,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: InteractiveController,
        explorer: ExplorerState,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        let mut app = Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            controller,
            state: GuiAppState::new(explorer),
            bindings: InputBindings::default(),
            egui_ctx,
            egui_state,
        };

        app.sync_view_to_window();
        app
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.presenter.resize(width, height) {
            warn!("framebuffer not resized to {}x{}: {}", width, height, err);
        }

        self.sync_view_to_window();
    }

    fn sync_view_to_window(&mut self) {
        if self.width > 0 && self.height > 0 {
            self.state.apply(ExplorerCommand::Resize {
                width: f64::from(self.width),
                height: f64::from(self.height),
            });
        }
    }

    pub fn submit_frame_request_if_needed(&mut self) {
        let Ok(pixel_rect) = PixelRect::from_size(self.width, self.height) else {
            return;
        };

        let request = self.state.build_frame_request(pixel_rect);

        if self.state.should_submit(&request) {
            let request = Arc::new(request);
            let generation = self.controller.submit_request(Arc::clone(&request));
            debug!("submitted frame {}", generation);
            self.state.record_submission(request, generation);
        }
    }

    /// Runs the control panel and applies whatever it changed.
    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let mut commands: Vec<ExplorerCommand> = Vec::new();
        let mut commit_colours = false;
        let mut revert_colours = false;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::SidePanel::left("explorer_controls")
                .default_width(240.0)
                .show(ctx, |ui| {
                    let explorer = &self.state.explorer;

                    ui.heading("Escape-Time Explorer");
                    ui.separator();

                    let current = explorer.params().variant();
                    egui::ComboBox::from_label("Fractal")
                        .selected_text(current.display_name())
                        .show_ui(ui, |ui| {
                            for &variant in FractalVariant::ALL {
                                if ui
                                    .selectable_label(variant == current, variant.display_name())
                                    .clicked()
                                    && variant != current
                                {
                                    commands.push(ExplorerCommand::ChangeVariant(
                                        variant.id() - current.id(),
                                    ));
                                }
                            }
                        });

                    let mut max_iterations = explorer.params().max_iterations();
                    if ui
                        .add(
                            egui::Slider::new(&mut max_iterations, 1..=PANEL_MAX_ITERATIONS)
                                .logarithmic(true)
                                .text("Max iterations"),
                        )
                        .changed()
                    {
                        commands.push(ExplorerCommand::SetMaxIterations(max_iterations));
                    }

                    let mut escape_radius = explorer.params().escape_radius();
                    ui.horizontal(|ui| {
                        ui.label("Escape radius");
                        if ui
                            .add(egui::DragValue::new(&mut escape_radius).speed(0.1))
                            .changed()
                        {
                            commands.push(ExplorerCommand::SetEscapeRadius(escape_radius));
                        }
                    });

                    ui.separator();

                    let mut julia_enabled = explorer.julia().enabled;
                    if ui.checkbox(&mut julia_enabled, "Julia mode (J)").changed() {
                        commands.push(ExplorerCommand::SetJulia(julia_enabled));
                    }
                    let seed = explorer.julia().seed;
                    ui.label(format!("Seed: {:.5} {:+.5}i", seed.real, seed.imag));
                    ui.small("Ctrl + move to pick the seed");

                    ui.separator();

                    // Enter or clicking away commits, Escape reverts
                    let escape_pressed = ui.input(|i| i.key_pressed(egui::Key::Escape));
                    ui.horizontal(|ui| {
                        ui.label("Base");
                        if ui
                            .text_edit_singleline(&mut self.state.base_colour_text)
                            .lost_focus()
                        {
                            revert_colours |= escape_pressed;
                            commit_colours |= !escape_pressed;
                        }
                    });
                    ui.horizontal(|ui| {
                        ui.label("Blend");
                        if ui
                            .text_edit_singleline(&mut self.state.blend_colour_text)
                            .lost_focus()
                        {
                            revert_colours |= escape_pressed;
                            commit_colours |= !escape_pressed;
                        }
                    });
                    if let Some(message) = &self.state.colour_error {
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }

                    ui.separator();

                    let view = self.state.explorer.view();
                    ui.label(format!("Scale: {:.6e}", view.scale()));
                    ui.label(format!(
                        "Centre: {:.6} {:+.6}i",
                        view.x_offset(),
                        view.y_offset()
                    ));
                    if ui.button("Reset view (R)").clicked() {
                        commands.push(ExplorerCommand::ResetView);
                    }

                    ui.separator();
                    ui.label(format!("Window: {}x{}", self.width, self.height));
                    ui.label(format!(
                        "Latest frame: {}",
                        self.state.latest_submitted_generation
                    ));
                    if let Some(duration) = self.presenter.last_render_duration() {
                        ui.label(format!("Last render: {} ms", duration.as_millis()));
                    }
                    if let Some(message) = self.presenter.last_error_message() {
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        });

        for command in commands {
            self.state.apply(command);
        }

        if revert_colours {
            self.state.revert_colour_text();
        } else if commit_colours {
            self.state.commit_colour_text();
        }

        output
    }

    /// Feeds a window event to egui. Returns `(consumed, repaint)`.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    /// Maps fractal input to explorer commands. Returns whether the view needs a new frame.
    pub fn handle_input(&mut self, event: &WindowEvent, egui_consumed: bool) -> bool {
        let command = match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if egui_consumed || self.egui_ctx.wants_keyboard_input() {
                    return false;
                }

                match event.physical_key {
                    PhysicalKey::Code(key_code) => self.bindings.on_key(key_code, event.state),
                    PhysicalKey::Unidentified(_) => None,
                }
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.bindings
                    .on_ctrl_changed(modifiers.state().control_key());
                None
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if *state == ElementState::Pressed && self.egui_ctx.wants_pointer_input() {
                    return false;
                }

                self.bindings.on_mouse_button(*button, *state);
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                let command = self.bindings.on_cursor_moved(position.x, position.y);

                if self.egui_ctx.is_using_pointer() {
                    return false;
                }

                command
            }
            WindowEvent::CursorLeft { .. } => {
                self.bindings.on_cursor_left();
                None
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if egui_consumed || self.egui_ctx.wants_pointer_input() {
                    return false;
                }

                self.bindings.on_wheel(*delta)
            }
            WindowEvent::Focused(false) => {
                self.bindings.reset();
                None
            }
            _ => None,
        };

        command.is_some_and(|command| self.state.apply(command))
    }

    pub fn run(
        mut self,
        event_loop: EventLoop<GuiEvent>,
        window: &'static Window,
    ) -> Result<(), EventLoopError> {
        let mut redraw_pending = true;

        event_loop.run(move |event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => {
                redraw_pending = true;
            }
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let (egui_consumed, egui_repaint) = self.handle_window_event(window, event);

                if egui_repaint {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        self.controller.shutdown();
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        let egui_output = self.update_ui(window);
                        self.submit_frame_request_if_needed();

                        self.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if egui_output
                            .viewport_output
                            .values()
                            .any(|v| v.repaint_delay.is_zero())
                        {
                            redraw_pending = true;
                        }

                        if let Err(err) = self.render(egui_output) {
                            error!("render failed: {}", err);
                            self.controller.shutdown();
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        self.resize(size.width, size.height);
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.scale_factor = *scale_factor;
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        self.resize(size.width, size.height);
                        redraw_pending = true;
                    }
                    _ => {
                        if self.handle_input(event, egui_consumed) {
                            redraw_pending = true;
                        }
                    }
                }
            }
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })
    }
}
