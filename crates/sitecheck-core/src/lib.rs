//! # sitecheck-core - Core Domain Types
//!
//! Foundation crate for Site Check. Provides the backend verdict model,
//! the detail report formatter, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Analysis (`analysis`)
//! - [`AnalysisResult`] - Verdict returned by the backend for a submitted URL
//! - [`CheckRequest`] - Request body sent to the backend
//!
//! ### Report (`report`)
//! - [`report_rows()`] - Labelled rows shared by every report renderer
//! - [`render_html()`] - Standalone HTML document for the detail view
//! - [`escape_html()`] - Escaping used for every interpolated value
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use sitecheck_core::prelude::*;
//! ```

pub mod analysis;
pub mod error;
pub mod logging;
pub mod report;

/// Prelude for common imports used throughout all Site Check crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use analysis::{AnalysisResult, CheckRequest, GENUINE_STATUS};
pub use error::{Error, Result, ResultExt};
pub use report::{escape_html, render_html, report_rows, ReportRow, RowTone};
