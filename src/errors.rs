use thiserror::Error;

#[derive(Debug, Error)]
pub enum CourseBuddyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Feedback file {path} is malformed: {details}")]
    MalformedFeedback { path: String, details: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialize error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type CourseBuddyResult<T> = Result<T, CourseBuddyError>;
