use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Store read failed: {message}")]
    StoreRead { message: String },

    #[error("Print surface unavailable: {message}")]
    SurfaceUnavailable { message: String },

    #[error("Malformed cache entry '{key}': {reason}")]
    MalformedCache { key: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
