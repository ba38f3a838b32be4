//! occi-text - OCCI Category text codec

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use occi_text::cli::App;
use occi_text::config;

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let app = App::parse();

    // Load configuration before logging so it can raise the log level
    let loaded = config::try_init();

    // Initialize logging
    let verbose = app.verbose || config::settings().main.verbose;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = &loaded {
        config::log_fallback(e);
    }

    app.run()
}
