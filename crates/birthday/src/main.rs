use birthday::{App, LogSettings, init_logging};
use clap::Parser;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "birthday")]
#[command(about = "Compare exact and Monte Carlo birthday paradox probabilities")]
struct Args {
    /// Directory for the log file (default: ~/.birthday/)
    #[arg(short = 'd', long)]
    log_dir: Option<PathBuf>,

    /// Log level (off, trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".birthday")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let log_dir = args.log_dir.unwrap_or_else(default_log_dir);

    init_logging(&LogSettings::new(log_dir, args.log_level))?;

    let mut app = App::new()?;

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
