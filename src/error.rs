use std::fmt::Display;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Launch, navigation or content fault reported by the browser.
    #[error("browser error: {0}")]
    Browser(String),

    #[error("invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("progress marker error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("checkpoint {path:?} has unexpected columns: {found:?}")]
    CheckpointSchema { path: PathBuf, found: Vec<String> },
}

impl ScrapeError {
    /// headless_chrome reports failures as `anyhow::Error`; keep the message only.
    pub fn browser(err: impl Display) -> Self {
        ScrapeError::Browser(err.to_string())
    }
}
