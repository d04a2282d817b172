//! HTML rendering error types

use thiserror::Error;

/// Result type for HTML rendering operations
pub type HtmlResult<T> = std::result::Result<T, HtmlError>;

/// Errors that can occur while building or writing an HTML table
#[derive(Debug, Error)]
pub enum HtmlError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Grid snapshot is not valid JSON for the expected shape
    #[error("Snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] sheet_html_core::Error),

    /// An attribute name outside the recognized vocabulary was requested.
    /// This is a caller bug, not bad data.
    #[error("No such attribute {0}")]
    UnrecognizedAttribute(String),

    /// Two merge regions share at least one cell
    #[error("Merge region {region} overlaps another region at {address}")]
    OverlappingMerge { region: String, address: String },

    /// A merge region reaches outside the grid
    #[error("Merge region {region} covers {address}, which is outside the grid")]
    MergeOutOfBounds { region: String, address: String },

    /// A snapshot record contradicts itself
    #[error("Snapshot cell {address}: {message}")]
    SnapshotMismatch { address: String, message: String },
}
