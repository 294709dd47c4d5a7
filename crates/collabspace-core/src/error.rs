use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpaceError {
    #[error("Mount error: {0}")]
    Mount(String),

    #[error("Binding error: {0}")]
    Binding(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Auth error: {0}")]
    Auth(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SpaceError {
    pub fn mount(message: impl Into<String>) -> Self {
        Self::Mount(message.into())
    }

    pub fn binding(message: impl Into<String>) -> Self {
        Self::Binding(message.into())
    }
}

pub type Result<T> = std::result::Result<T, SpaceError>;
