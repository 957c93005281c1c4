//! Error types for table loading

/// Errors that can occur while deserializing a table configuration.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("invalid table TOML")]
    Toml(#[from] toml::de::Error),

    #[error("invalid table JSON")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TableError>;
