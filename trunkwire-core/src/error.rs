//! Error types for trunkwire

use thiserror::Error;

/// Result type alias for trunkwire operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for trunkwire
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading capture input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid parameter error
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Packet parsing error
    #[error("Packet parsing error: {0}")]
    PacketParsing(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Resource already exists
    #[error("Resource already exists: {0}")]
    AlreadyExists(String),
}

impl Error {
    /// Create a packet parsing error with a custom message
    pub fn parsing<S: Into<String>>(msg: S) -> Self {
        Error::PacketParsing(msg.into())
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        Error::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::parsing("short frame").to_string(),
            "Packet parsing error: short frame"
        );
        assert_eq!(
            Error::invalid_parameter("hex", "odd length").to_string(),
            "Invalid parameter 'hex': odd length"
        );
        assert_eq!(
            Error::AlreadyExists("dtp".into()).to_string(),
            "Resource already exists: dtp"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
