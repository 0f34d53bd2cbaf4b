use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use covid_tracker::{
    App, init_logging,
    data::storage::DataDirectory,
    state::AppState,
};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};

#[derive(Parser, Debug)]
#[command(name = "covid-tracker")]
#[command(about = "A terminal dashboard for COVID-19 case counts")]
struct Args {
    /// Path to the data directory (default: ~/.covid-tracker/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Location payload to load (default: <data-dir>/locations.json)
    #[arg(short = 'f', long)]
    data_file: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let storage = DataDirectory::new(args.data_dir.unwrap_or_else(DataDirectory::default_path));

    init_logging(storage.root(), &args.log_level)?;

    if let Err(err) = storage.init() {
        tracing::warn!("Failed to initialize data directory: {err}");
    }
    let settings = storage.load_settings().unwrap_or_else(|err| {
        tracing::warn!("Falling back to default settings: {err}");
        Default::default()
    });
    let keybindings = storage.load_keybindings();
    let data_file = storage.resolve_data_file(args.data_file, &settings);
    tracing::info!(data_file = %data_file.display(), "Starting");

    let mut app = App::new(AppState::new(settings, keybindings, data_file));

    let result = ratatui::run(|terminal| {
        execute!(stdout(), EnableMouseCapture)?;
        let result = app.run(terminal);
        execute!(stdout(), DisableMouseCapture)?;
        result
    });

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    result
}
