//! Background frame rendering for the interactive explorer.
//!
//! Input handlers submit [`data::frame_request::FrameRequest`]s; a single worker thread
//! renders them and reports each result through an
//! [`ports::presenter::InteractiveControllerPresenterPort`].

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
