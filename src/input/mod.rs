//! Input adapters that turn user input into explorer commands.

#[cfg(feature = "gui")]
pub mod gui;
