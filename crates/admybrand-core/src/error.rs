use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LandingError {
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("Unknown theme: {0:?}")]
    UnknownTheme(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, LandingError>;
