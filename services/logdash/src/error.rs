//! Error types for the log dashboard

/// Errors that can occur while loading data or rendering the dashboard
#[derive(Debug, thiserror::Error)]
pub enum LogdashError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid dashboard data: {0}")]
    InvalidData(String),

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("Dashboard error: {0}")]
    Dashboard(String),
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, LogdashError>;
