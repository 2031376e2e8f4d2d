// folio binary: JSON output or the interactive project browser.

use std::fs::{self, OpenOptions};
use std::sync::{Arc, Mutex};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use folio::app::App;
use folio::cache;
use folio::config::{Cli, Config};
use folio::projects::MetadataProvider;

/// Log to stderr for JSON output; to a file while the TUI owns the terminal.
fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info"));

    if cli.json {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return;
    }

    let log_path = cli
        .cache_dir
        .as_ref()
        .map(|dir| dir.join("folio.log"))
        .or_else(cache::log_path);
    let log_file = log_path.and_then(|path| {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        OpenOptions::new().create(true).append(true).open(path).ok()
    });

    if let Some(file) = log_file {
        fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }
}

#[tokio::main]
async fn main() -> folio::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = Config::from_cli(cli);
    let provider = MetadataProvider::from_config(&config)?;
    if config.refresh {
        info!("Discarding cached repository listing");
        provider.invalidate_cache();
    }

    if config.json {
        match provider.get_featured_repositories(config.limit).await {
            Ok(projects) => {
                println!("{}", serde_json::to_string_pretty(&projects)?);
                return Ok(());
            }
            Err(e) => {
                error!(error = %e, "Failed to load featured projects");
                return Err(e);
            }
        }
    }

    let mut app = App::new(Arc::new(provider), &config);
    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result?;
    Ok(())
}
