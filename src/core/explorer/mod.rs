pub mod command;
pub mod snapshot;
pub mod state;
