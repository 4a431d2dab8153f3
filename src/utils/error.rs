use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for TOC operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for TOC operations
#[derive(Debug)]
pub enum TocError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Metadata header value that cannot be interpreted
    Metadata(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for TocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TocError::Io(err) => write!(f, "IO error: {}", err),
            TocError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TocError::Metadata(msg) => write!(f, "Metadata header error: {}", msg),
            TocError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for TocError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TocError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for TocError {
    fn from(err: io::Error) -> Self {
        TocError::Io(err)
    }
}

impl From<String> for TocError {
    fn from(msg: String) -> Self {
        TocError::Generic(msg)
    }
}

impl From<&str> for TocError {
    fn from(msg: &str) -> Self {
        TocError::Generic(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = TocError::Metadata("timestamp not in UTC".to_string());
        assert_eq!(err.to_string(), "Metadata header error: timestamp not in UTC");

        let err: TocError = "plain".into();
        assert_eq!(err.to_string(), "plain");
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err: TocError = io::Error::new(io::ErrorKind::NotFound, "missing.md").into();
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("IO error:"));
    }
}
