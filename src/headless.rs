//! Headless mode - one check without the TUI
//!
//! Runs a single check through the same Engine the TUI uses and prints the
//! outcome for scripts: the summary line (or the verdict as JSON) on stdout,
//! or the user-facing error text on stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use sitecheck_app::config::Settings;
use sitecheck_app::message::Message;
use sitecheck_app::state::{Failure, OutputState};
use sitecheck_app::{CheckService, Engine};
use sitecheck_core::prelude::*;
use sitecheck_core::render_html;

/// Exit code for a `Genuine` verdict
pub const EXIT_GENUINE: u8 = 0;

/// Exit code for any other verdict
pub const EXIT_NOT_GENUINE: u8 = 1;

/// Exit code when no verdict was obtained (empty URL, transport failure)
pub const EXIT_NO_VERDICT: u8 = 2;

/// Options for a headless check
#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    pub url: Option<String>,
    /// Print the backend's JSON body instead of the summary line
    pub json: bool,
    /// Write the HTML report here when a verdict arrives
    pub report: Option<PathBuf>,
}

/// What a headless check printed, and how it should exit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessOutput {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub exit_code: u8,
}

impl HeadlessOutput {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            stdout: None,
            stderr: Some(message.into()),
            exit_code: EXIT_NO_VERDICT,
        }
    }
}

/// Run one check against the configured backend and print the outcome
pub async fn run_headless(mut settings: Settings, options: HeadlessOptions) -> Result<ExitCode> {
    info!("Site Check starting in headless mode");

    // Headless never launches a browser on its own
    settings.report.open_in_browser = false;

    let mut engine = Engine::from_settings(settings)?;
    let output = check_once(&mut engine, &options).await?;
    engine.shutdown();

    if let Some(text) = &output.stdout {
        println!("{text}");
    }
    if let Some(text) = &output.stderr {
        eprintln!("{text}");
    }
    Ok(ExitCode::from(output.exit_code))
}

/// Submit `options.url` through `engine` and wait for the outcome
pub async fn check_once<C>(engine: &mut Engine<C>, options: &HeadlessOptions) -> Result<HeadlessOutput>
where
    C: CheckService + Clone + Sync + 'static,
{
    engine.set_input(options.url.as_deref().unwrap_or_default());
    engine.process_message(Message::SubmitCheck);
    engine.run_until_idle().await;

    let result = match &engine.state.output {
        OutputState::Success(result) | OutputState::Failure(Failure::Verdict(result)) => {
            result.clone()
        }
        OutputState::Failure(Failure::Transport { detail }) => {
            error!("Check failed: {}", detail);
            return Ok(HeadlessOutput::failure(engine.state.output.text()));
        }
        OutputState::Failure(Failure::EmptyInput) => {
            return Ok(HeadlessOutput::failure(engine.state.output.text()));
        }
        OutputState::Idle | OutputState::Checking => {
            warn!("Check interrupted before a response arrived");
            return Ok(HeadlessOutput::failure("Check cancelled."));
        }
    };

    if let Some(path) = &options.report {
        tokio::fs::write(path, render_html(&result))
            .await
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        info!("Wrote report to {}", path.display());
    }

    let stdout = if options.json {
        match &result.raw_body {
            Some(body) => body.trim_end().to_string(),
            None => serde_json::to_string_pretty(&result)?,
        }
    } else {
        result.summary_line()
    };

    Ok(HeadlessOutput {
        stdout: Some(stdout),
        stderr: None,
        exit_code: if result.is_genuine() {
            EXIT_GENUINE
        } else {
            EXIT_NOT_GENUINE
        },
    })
}
