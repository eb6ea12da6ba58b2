use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("File is empty: {path}")]
    EmptyFile { path: String },

    #[error("Invalid JSON in {path}: {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid input format in {path}: {reason}")]
    InvalidFormat { path: String, reason: String },

    #[error("Configuration error: {field}: {reason}")]
    ConfigError { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, CheckError>;
