//! HTML report export and browser launch

use std::path::{Path, PathBuf};
use std::process::Command;

use sitecheck_core::prelude::*;
use sitecheck_core::{render_html, AnalysisResult};
use tokio::sync::mpsc;

use crate::message::Message;
use crate::state::RequestId;

/// Directory HTML reports are written to
pub fn reports_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("site-check")
        .join("reports")
}

/// File name of the report for one request
pub fn report_path(dir: &Path, request_id: RequestId) -> PathBuf {
    dir.join(format!("report-{}.html", request_id.0))
}

/// Write the report document for `result` into `dir`
pub async fn write_report(
    dir: &Path,
    request_id: RequestId,
    result: &AnalysisResult,
) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = report_path(dir, request_id);
    tokio::fs::write(&path, render_html(result)).await?;
    debug!("Wrote report {}", path.display());
    Ok(path)
}

pub(super) fn spawn_open_report(
    request_id: RequestId,
    result: AnalysisResult,
    browser: String,
    msg_tx: mpsc::Sender<Message>,
) {
    tokio::spawn(async move {
        let msg = match write_report(&reports_dir(), request_id, &result).await {
            Ok(path) => match open_in_browser(&path, &browser) {
                Ok(()) => Message::ReportOpened { path },
                Err(e) => Message::ReportOpenFailed {
                    error: e.to_string(),
                },
            },
            Err(e) => Message::ReportOpenFailed {
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}

/// Open a file in the configured browser, or the platform default opener
/// when `browser` is empty.
///
/// The child is spawned and not waited on.
pub fn open_in_browser(path: &Path, browser: &str) -> std::io::Result<()> {
    if !browser.is_empty() {
        Command::new(browser).arg(path).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(path).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(path).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd")
            .args(["/C", "start", ""])
            .arg(path)
            .spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}
