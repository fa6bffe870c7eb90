//! Site Check - check whether a website looks trustworthy
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sitecheck_app::config;
use sitecheck_core::{logging, prelude::*};

/// Site Check - ask the analysis backend whether a website is genuine
#[derive(Parser, Debug)]
#[command(name = "sitecheck", version)]
#[command(about = "Check whether a website looks trustworthy", long_about = None)]
struct Args {
    /// URL to check right away
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Base URL of the analysis backend (overrides the config file)
    #[arg(long, value_name = "BASE_URL")]
    backend: Option<String>,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run one check without the TUI and print the result
    #[arg(long)]
    headless: bool,

    /// Print the verdict as JSON (headless only)
    #[arg(long, requires = "headless")]
    json: bool,

    /// Write the HTML report to PATH (headless only)
    #[arg(long, value_name = "PATH", requires = "headless")]
    report: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logs go to a file; the terminal belongs to the TUI
    logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("Site Check starting");
    info!("═══════════════════════════════════════════════════════");

    if args.config.is_none() {
        if let Some(path) = config::default_config_path() {
            match config::init_config_file(&path) {
                Ok(_) => {}
                Err(e) if e.is_recoverable() => {
                    warn!("Failed to write default config: {}", e);
                }
                Err(e) => return Err(e),
            }
        }
    }

    let mut settings = config::load_settings(args.config.as_deref());
    if let Some(backend) = args.backend {
        settings.backend.base_url = backend;
    }

    let result = if args.headless {
        site_check::run_headless(
            settings,
            site_check::HeadlessOptions {
                url: args.url,
                json: args.json,
                report: args.report,
            },
        )
        .await
    } else {
        site_check::run_tui(settings, args.url)
            .await
            .map(|()| ExitCode::SUCCESS)
    };

    match result {
        Err(ref e) if e.is_fatal() => error!("Fatal error: {:?}", e),
        Err(ref e) => error!("Application error: {:?}", e),
        Ok(_) => {}
    }

    info!("Site Check exiting");
    result
}
