use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rosterm::config::Config;
use rosterm::directory::{create_directory, DirectoryService, MemoryDirectory};
use rosterm::logger::Logger;
use rosterm::ui;

#[derive(Parser, Debug)]
#[command(name = "rosterm", version, about = "Terminal console for an employee directory service")]
struct Cli {
    /// Configuration file to use instead of the default lookup
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the default configuration and exit
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    generate_config: Option<Option<PathBuf>>,

    /// Use an in-memory directory seeded with sample employees
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.generate_config {
        let path = match path {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let logger = Logger::from_config(&config.logging).context("Failed to initialize logging")?;
    if let Some(path) = logger.log_file() {
        log::info!("rosterm {} starting, logging to {}", env!("CARGO_PKG_VERSION"), path.display());
    }

    let directory: Arc<dyn DirectoryService> = if cli.demo {
        log::info!("Demo mode: using in-memory directory");
        Arc::new(MemoryDirectory::with_sample_data())
    } else {
        create_directory(&config.directory)?
    };

    ui::run_app(directory, logger, &config).await
}
