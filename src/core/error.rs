//! Error type for dataset loading and export

use thiserror::Error;

/// Errors raised while reading datasets or writing catalogs
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input or JSON serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML input
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Input in a shape or format this crate does not read
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Template rendering failure
    #[error("render error: {0}")]
    Render(#[from] askama::Error),
}

/// Result alias used by loaders, exporters and reports
pub type Result<T> = std::result::Result<T, CatalogError>;
