use std::fmt;

/// Infrastructure errors for sitepulse operations.
///
/// Probe failures are never represented here; they are ordinary results
/// with `reachable == false`.
#[derive(Debug)]
pub enum SitePulseError {
    /// IO error (config file reads, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client construction error
    Http(reqwest::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// JSON serialization error
    Json(serde_json::Error),
}

impl fmt::Display for SitePulseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SitePulseError::Io(err) => write!(f, "IO error: {err}"),
            SitePulseError::Config(msg) => write!(f, "Configuration error: {msg}"),
            SitePulseError::Http(err) => write!(f, "HTTP error: {err}"),
            SitePulseError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            SitePulseError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl std::error::Error for SitePulseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SitePulseError::Io(err) => Some(err),
            SitePulseError::Http(err) => Some(err),
            SitePulseError::TomlParsing(err) => Some(err),
            SitePulseError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SitePulseError {
    fn from(err: std::io::Error) -> Self {
        SitePulseError::Io(err)
    }
}

impl From<reqwest::Error> for SitePulseError {
    fn from(err: reqwest::Error) -> Self {
        SitePulseError::Http(err)
    }
}

impl From<toml::de::Error> for SitePulseError {
    fn from(err: toml::de::Error) -> Self {
        SitePulseError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for SitePulseError {
    fn from(err: serde_json::Error) -> Self {
        SitePulseError::Json(err)
    }
}

/// Type alias for Results using SitePulseError
pub type Result<T> = std::result::Result<T, SitePulseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let config_error = SitePulseError::Config("Invalid timeout".to_string());
        assert_eq!(
            format!("{config_error}"),
            "Configuration error: Invalid timeout"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err = SitePulseError::from(io_error);

        match err {
            SitePulseError::Io(_) => {} // Expected
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_from_toml() {
        let toml_error = toml::from_str::<toml::Value>("invalid toml [").unwrap_err();
        let err = SitePulseError::from(toml_error);

        match err {
            SitePulseError::TomlParsing(_) => {} // Expected
            _ => panic!("Expected TomlParsing variant"),
        }
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SitePulseError::from(json_error);

        assert!(matches!(err, SitePulseError::Json(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err = SitePulseError::Io(io_error);
        assert!(err.source().is_some());

        let config_error = SitePulseError::Config("test".to_string());
        assert!(config_error.source().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SitePulseError>();
    }
}
