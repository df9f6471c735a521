use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppCensusError {
    #[error("Inventory command failed: {message}")]
    InventoryCommand { message: String },

    #[error("Failed to parse inventory output: {0}")]
    InventoryParse(#[from] serde_json::Error),

    #[error("Config parse error in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Config key not found: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppCensusError>;

impl AppCensusError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigKeyNotFound { .. } => 2,
            Self::ConfigParse { .. } => 3,
            _ => 1,
        }
    }
}
