use thiserror::Error;

#[derive(Error, Debug)]
pub enum HrError {
    #[error("Employee not found: {0}")]
    NotFound(i64),

    #[error("An employee named {first_name} {last_name} already exists")]
    Duplicate {
        first_name: String,
        last_name: String,
    },

    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Malformed request rejected before reaching a handler (bad body, path or content type)
    #[error("Invalid request: {message}")]
    InvalidRequest { status: u16, message: String },

    #[error("GROQ_API_KEY is not configured")]
    MissingApiKey,

    #[error("Chat provider error: {details}")]
    Upstream { status: Option<u16>, details: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HrError>;
