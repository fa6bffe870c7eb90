//! Background check task

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::client::CheckService;
use crate::message::Message;
use crate::state::RequestId;

use super::CheckTaskSlot;

/// Run a check in the background, replacing any check still in flight.
///
/// The previous task is aborted so at most one request is outstanding; the
/// handler discards anything that still slips through by request id.
pub(super) fn spawn_check<C>(
    request_id: RequestId,
    url: String,
    client: C,
    msg_tx: mpsc::Sender<Message>,
    check_task: &CheckTaskSlot,
) where
    C: CheckService + Sync + 'static,
{
    let handle = tokio::spawn(async move {
        let outcome = match client.check(&url).await {
            Ok(result) => Ok(result),
            Err(e) => {
                warn!("Check {} for {} failed: {}", request_id, url, e);
                Err(e.to_string())
            }
        };

        if msg_tx
            .send(Message::CheckCompleted {
                request_id,
                outcome,
            })
            .await
            .is_err()
        {
            debug!("Check {} finished after the event loop closed", request_id);
        }
    });

    match check_task.lock() {
        Ok(mut guard) => {
            if let Some(previous) = guard.replace(handle) {
                if !previous.is_finished() {
                    info!("Aborting superseded check before {}", request_id);
                    previous.abort();
                }
            }
        }
        Err(e) => {
            warn!(
                "Check {} could not be tracked (poisoned lock): {}",
                request_id, e
            );
        }
    }
}
