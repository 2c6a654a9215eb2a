//! Interactive explorer window: winit for the window and input, pixels for the
//! framebuffer and egui for the control panel.

pub mod app;
pub mod commands;
pub mod events;
