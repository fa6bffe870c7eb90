//! Custom widget components

mod header;
mod key_hints;
pub mod modal_overlay;
mod report_dialog;
mod status_line;
mod url_input;

pub use header::Header;
pub use key_hints::KeyHints;
pub use report_dialog::ReportDialog;
pub use status_line::StatusLine;
pub use url_input::UrlInputField;
