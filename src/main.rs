use clap::{Parser, ValueEnum};
use std::path::PathBuf;

mod assessment;
mod catalog;
mod cli;
mod dashboard;
mod exams;
mod gui;
mod reports;
mod routes;
mod settings;
mod support;
mod theme;

use routes::Route;
use settings::{default_base_path, ensure_base_folders, load_or_init_settings, save_settings};

#[derive(Parser, Debug)]
#[command(
    name = "assessment-pro",
    version,
    about = "Assessment Pro: create, organize and track assessments"
)]
struct CliArgs {
    /// Choose GUI (default) or CLI mode
    #[arg(long, value_enum, default_value = "gui")]
    mode: RunMode,
    /// Override data base path (defaults to ./data next to the exe)
    #[arg(long)]
    base_path: Option<PathBuf>,
    /// Page to open first, e.g. /reports (defaults to the last page visited)
    #[arg(long)]
    page: Option<String>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RunMode {
    Gui,
    Cli,
}

fn init_logging() {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(log::LevelFilter::Info);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn main() {
    init_logging();
    let args = CliArgs::parse();
    let base_path = args.base_path.unwrap_or_else(default_base_path);

    if let Err(e) = ensure_base_folders(&base_path) {
        log::error!("Failed to create base folders at {}: {e}", base_path.display());
        return;
    }

    let mut settings = match load_or_init_settings(&base_path) {
        Ok(s) => s,
        Err(e) => {
            log::error!("Failed to load settings: {e}");
            return;
        }
    };

    log::info!("Using data path: {}", base_path.display());

    settings.base_path = base_path.to_string_lossy().to_string();
    settings.mode = match args.mode {
        RunMode::Gui => "gui".to_string(),
        RunMode::Cli => "cli".to_string(),
    };

    match args.mode {
        RunMode::Gui => {
            let initial = Route::resolve(
                args.page
                    .as_deref()
                    .or(settings.ui.last_page.as_deref())
                    .unwrap_or("/"),
            );
            // The window writes its own last page and size on exit.
            if let Err(e) = gui::launch_gui(base_path.clone(), settings.clone(), initial) {
                log::error!("Failed to start GUI: {e}");
            }
            if let Ok(saved) = load_or_init_settings(&base_path) {
                settings.ui = saved.ui;
            }
        }
        RunMode::Cli => cli::run_cli(&settings, &base_path),
    }

    if let Err(e) = save_settings(&settings, &base_path) {
        log::error!("Could not save settings: {e}");
    }
}
