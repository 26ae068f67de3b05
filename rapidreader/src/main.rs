//! RapidReader: terminal RSVP speed reader.

mod commands;
mod logging;

use std::{io, path::PathBuf};

use clap::Parser;
use reader_core::{
    config,
    library::{FileStorage, Library},
    settings::SettingsStore,
};
use tracing::{info, warn};

use commands::Commands;

/// Read texts and documents one word at a time
#[derive(Parser, Debug)]
#[command(name = "rapidreader")]
#[command(version)]
#[command(about = "Terminal speed reader that flashes one word at a time")]
pub struct Args {
    /// Document to import and open on launch
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Library file to use instead of the configured one
    #[arg(long)]
    pub library: Option<PathBuf>,

    /// Settings file to use instead of the configured one
    #[arg(long)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → config file → env vars → CLI args
    let config = {
        let file = config::load_config_with_precedence(args.config.as_deref())?;
        let merged = config::merge_config(file);
        let with_env = config::apply_env_overrides(merged);
        config::apply_cli_overrides(with_env, args.library.clone(), args.settings.clone())
    };

    logging::init(&config.log_file, &config.log_level)?;
    info!(config = ?config, "configuration resolved");

    let mut library = Library::open(FileStorage::new(&config.library_path));

    if let Some(command) = args.command {
        if let Err(e) = commands::run(command, &mut library, &mut io::stdout().lock()) {
            warn!(error = %e, "command failed");
            eprintln!("rapidreader: {e}");
            std::process::exit(1);
        }
        return Ok(());
    }

    let mut app = ui::App::new(library, SettingsStore::new(&config.settings_path));
    if let Some(path) = &args.file {
        if !app.open_path(path) {
            warn!(path = %path.display(), "could not open file given on the command line");
        }
    }
    app.run()?;
    Ok(())
}
