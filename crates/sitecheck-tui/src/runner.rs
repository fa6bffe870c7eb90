//! Main TUI runner - entry point and event loop

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use sitecheck_app::config::Settings;
use sitecheck_app::message::Message;
use sitecheck_app::Engine;
use sitecheck_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI.
///
/// With `initial_url`, the URL line is pre-filled and checked right away.
pub async fn run(settings: Settings, initial_url: Option<String>) -> Result<()> {
    let mut engine = Engine::from_settings(settings)?;

    terminal::install_panic_hook();
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if let Err(e) = crossterm::execute!(std::io::stdout(), EnableBracketedPaste) {
        warn!("Bracketed paste unavailable: {}", e);
    }

    if let Some(url) = initial_url {
        engine.set_input(&url);
        engine.process_message(Message::SubmitCheck);
    }

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    let _ = crossterm::execute!(std::io::stdout(), DisableBracketedPaste);
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Check completions, signal handler, report export results
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("Exiting TUI");
    Ok(())
}
