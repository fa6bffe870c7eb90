//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::client::CheckService;
use crate::message::Message;
use crate::UpdateAction;

pub(crate) mod check;
pub(crate) mod report;

pub use report::{open_in_browser, report_path, reports_dir, write_report};

/// Handle of the check currently running in the background, if any
pub type CheckTaskSlot = Arc<std::sync::Mutex<Option<tokio::task::JoinHandle<()>>>>;

/// Execute an action by spawning a background task
pub fn handle_action<C>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    client: &C,
    check_task: &CheckTaskSlot,
) where
    C: CheckService + Clone + Sync + 'static,
{
    match action {
        UpdateAction::RunCheck { request_id, url } => {
            check::spawn_check(request_id, url, client.clone(), msg_tx, check_task);
        }

        UpdateAction::OpenReport {
            request_id,
            result,
            browser,
        } => {
            report::spawn_open_report(request_id, *result, browser, msg_tx);
        }
    }
}
