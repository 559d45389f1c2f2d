use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
