use std::error::Error;
use std::marker::PhantomData;

use log::info;
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoopBuilder;
use winit::window::{Window, WindowBuilder};

use crate::controllers::interactive::InteractiveController;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::events::GuiEvent;
use crate::storage::settings::ExplorerSettings;

const MIN_WINDOW_SIZE: f64 = 200.0;

/// Opens the explorer window and blocks until it is closed.
pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    settings: ExplorerSettings,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, settings: ExplorerSettings) -> Self {
        Self {
            presenter_factory,
            settings,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let explorer = self.settings.into_state()?;
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Escape-Time Explorer")
                .with_inner_size(LogicalSize::new(self.settings.width, self.settings.height))
                .with_min_inner_size(LogicalSize::new(MIN_WINDOW_SIZE, MIN_WINDOW_SIZE))
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window, event_loop_proxy)?;
        let controller = InteractiveController::new(presenter.share_adapter());
        let app = GuiApp::new(window, &event_loop, presenter, controller, explorer);

        info!("Explorer window open");
        app.run(event_loop, window)?;

        Ok(())
    }
}
