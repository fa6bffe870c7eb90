//! Engine - shared orchestration state for TUI and headless runners
//!
//! Owns the TEA state, the message channel, the backend client and the
//! handle of the check running in the background.

use sitecheck_core::prelude::*;
use tokio::sync::mpsc;

use crate::actions::CheckTaskSlot;
use crate::client::{CheckService, HttpCheckClient};
use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::{AppState, UrlInput};

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for Site Check.
///
/// Generic over the backend so tests can run the full message loop against
/// an in-process fake.
pub struct Engine<C = HttpCheckClient> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, event pollers).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    client: C,

    check_task: CheckTaskSlot,
}

impl Engine<HttpCheckClient> {
    /// Build an engine talking to the backend named in `settings`.
    ///
    /// Fails only when the configured endpoint is not a usable URL.
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let client = HttpCheckClient::new(&settings.backend)?;
        info!("Using backend {}", client.endpoint());
        Ok(Self::new(settings, client))
    }
}

impl<C> Engine<C>
where
    C: CheckService + Clone + Sync + 'static,
{
    /// Create the engine and spawn the OS signal handler.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(settings: Settings, client: C) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            client,
            check_task: CheckTaskSlot::default(),
        }
    }

    /// Replace the URL line, e.g. from a command-line argument
    pub fn set_input(&mut self, url: &str) {
        self.state.input = UrlInput::new(url);
    }

    /// Process a single message through the TEA update cycle
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.client,
            &self.check_task,
        );
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// before each render.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for channel messages until no check is in flight or a quit
    /// was requested.
    pub async fn run_until_idle(&mut self) {
        while self.state.is_checking() && !self.should_quit() {
            match self.msg_rx.recv().await {
                Some(msg) => self.process_message(msg),
                None => break,
            }
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Abort any check still in flight.
    pub fn shutdown(&mut self) {
        match self.check_task.lock() {
            Ok(mut guard) => {
                if let Some(handle) = guard.take() {
                    if !handle.is_finished() {
                        info!("Aborting in-flight check on shutdown");
                        handle.abort();
                    }
                }
            }
            Err(e) => warn!("Check task could not be aborted (poisoned lock): {}", e),
        }
    }
}
