use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizerError {
    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("source '{source_id}' is missing expected column: {column}")]
    MissingColumn { source_id: String, column: String },
}

pub type Result<T> = std::result::Result<T, NormalizerError>;
