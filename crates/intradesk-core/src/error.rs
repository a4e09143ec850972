use thiserror::Error;

/// Top-level error type for Intradesk.
///
/// Subsystem crates define their own error types and implement
/// `From<IntradeskError>` where they need to cross the crate boundary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IntradeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Roster error: {0}")]
    Roster(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for IntradeskError {
    fn from(err: toml::de::Error) -> Self {
        IntradeskError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for IntradeskError {
    fn from(err: toml::ser::Error) -> Self {
        IntradeskError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for IntradeskError {
    fn from(err: serde_json::Error) -> Self {
        IntradeskError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Intradesk operations.
pub type Result<T> = std::result::Result<T, IntradeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IntradeskError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_error_display_all_variants() {
        let cases: Vec<(IntradeskError, &str)> = vec![
            (
                IntradeskError::Config("bad key".to_string()),
                "Configuration error: bad key",
            ),
            (
                IntradeskError::Roster("no header".to_string()),
                "Roster error: no header",
            ),
            (
                IntradeskError::Chat("pipeline down".to_string()),
                "Chat error: pipeline down",
            ),
            (
                IntradeskError::Serialization("invalid json".to_string()),
                "Serialization error: invalid json",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: IntradeskError = io_err.into();
        assert!(matches!(err, IntradeskError::Io(_)));
        assert!(err.to_string().starts_with("I/O error:"));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_toml_de() {
        let err: std::result::Result<toml::Value, _> = toml::from_str("invalid = [[[");
        let err: IntradeskError = err.unwrap_err().into();
        assert!(matches!(err, IntradeskError::Config(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let err: std::result::Result<serde_json::Value, _> = serde_json::from_str("{ nope }");
        let err: IntradeskError = err.unwrap_err().into();
        assert!(matches!(err, IntradeskError::Serialization(_)));
    }

    #[test]
    fn test_result_type_with_question_mark() {
        fn inner() -> Result<String> {
            let io_result: std::result::Result<i32, std::io::Error> = Ok(42);
            let value = io_result?;
            Ok(value.to_string())
        }

        assert_eq!(inner().unwrap(), "42");
    }
}
