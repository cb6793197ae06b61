//! Error types for counsel-tui
//!
//! Domain-specific error enums using thiserror. Handler-level failures are
//! non-fatal: they land in the state's error ring buffer and the page degrades
//! to partial functionality instead of halting.

#[derive(Debug, thiserror::Error)]
pub enum FiguresError {
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O {path}: {source}")]
    Io { path: String, source: std::io::Error },
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum WatcherError {
    #[error("notify: {0}")]
    Notify(String),
    #[error("I/O: {0}")]
    Io(String),
}

impl From<notify::Error> for WatcherError {
    fn from(e: notify::Error) -> Self {
        WatcherError::Notify(e.to_string())
    }
}

impl From<std::io::Error> for WatcherError {
    fn from(e: std::io::Error) -> Self {
        WatcherError::Io(e.to_string())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SiteError {
    #[error("figures: {0}")]
    Figures(String),
    #[error(transparent)]
    Watcher(#[from] WatcherError),
}

impl From<FiguresError> for SiteError {
    fn from(e: FiguresError) -> Self {
        SiteError::Figures(e.to_string())
    }
}
