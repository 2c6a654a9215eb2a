use escape_time_explorer::{ExplorerSettings, PixelsPresenterFactory, RunGuiCommand, load_settings};

/// `gui [SETTINGS.json]`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match std::env::args().nth(1) {
        Some(path) => load_settings(path)?,
        None => ExplorerSettings::default(),
    };

    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), settings);

    command.execute()
}
