mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;
mod storage;

pub use crate::adapters::pixel_format::{PixelFormatError, copy_rgb_to_rgba, fill_rgba};
pub use crate::controllers::cli::render_image::RenderImageController;
pub use crate::controllers::interactive::InteractiveController;
pub use crate::controllers::interactive::data::frame_data::FrameData;
pub use crate::controllers::interactive::data::frame_request::FrameRequest;
pub use crate::controllers::interactive::errors::render_error::RenderError;
pub use crate::controllers::interactive::events::render_event::RenderEvent;
pub use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::render_frame::render_frame::{RenderFrameError, render_frame};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::rgb::{HexColourError, Rgb};
pub use crate::core::explorer::command::{ExplorerCommand, ExplorerCommandError};
pub use crate::core::explorer::snapshot::FrameSnapshot;
pub use crate::core::explorer::state::ExplorerState;
pub use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
pub use crate::core::fractals::escape_time::colour_ramp::ColourRamp;
pub use crate::core::fractals::escape_time::errors::EscapeTimeError;
pub use crate::core::fractals::escape_time::evaluator::{EscapeOutcome, evaluate, step};
pub use crate::core::fractals::escape_time::julia::JuliaState;
pub use crate::core::fractals::escape_time::params::FractalParameters;
pub use crate::core::fractals::escape_time::variant::FractalVariant;
pub use crate::core::view::coordinate_mapper::{pan_by, to_complex, to_complex_from_device, zoom_by};
pub use crate::core::view::view_state::{ViewState, ViewStateError};
pub use crate::presenters::file::ppm::PpmFilePresenter;
pub use crate::storage::settings::{ExplorerSettings, SettingsError, load_settings, save_settings};

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
