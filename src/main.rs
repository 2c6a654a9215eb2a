use std::path::PathBuf;

use escape_time_explorer::{ExplorerSettings, PpmFilePresenter, RenderImageController, load_settings};

const DEFAULT_OUTPUT_PATH: &str = "output/fractal.ppm";

/// `escape_time_explorer [OUTPUT.ppm] [SETTINGS.json]`
fn run(mut args: impl Iterator<Item = String>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let output = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()));
    let settings = match args.next() {
        Some(path) => load_settings(path)?,
        None => ExplorerSettings::default(),
    };

    if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut controller = RenderImageController::new(PpmFilePresenter::new());

    controller.generate(&settings)?;
    controller.write(&output)?;

    Ok(output)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run(std::env::args().skip(1))?;

    Ok(())
}
