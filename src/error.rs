use std::fmt;

#[derive(Debug)]
pub enum CartoonizeError {
    ConfigError(String),
    UnreadableImageError(String),
    NetworkError(String),
    ServiceError(String),
    InternalError(String),
}

impl fmt::Display for CartoonizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartoonizeError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            CartoonizeError::UnreadableImageError(msg) => write!(f, "Unreadable image: {}", msg),
            CartoonizeError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            CartoonizeError::ServiceError(msg) => write!(f, "Service error: {}", msg),
            CartoonizeError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for CartoonizeError {}

pub type Result<T> = std::result::Result<T, CartoonizeError>;
