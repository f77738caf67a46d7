//! Error types
//!
//! Rendering itself cannot fail; these errors come from setting a pipeline up.

use config::ConfigError;
use std::fmt;

#[derive(Debug)]
pub enum MdError {
    /// Configuration could not be loaded or deserialized
    Config(ConfigError),
    /// No converter is registered under the requested name
    ConverterNotFound(String),
}

impl fmt::Display for MdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MdError::Config(err) => write!(f, "Invalid configuration: {}", err),
            MdError::ConverterNotFound(name) => write!(f, "Unknown output format: {}", name),
        }
    }
}

impl std::error::Error for MdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MdError::Config(err) => Some(err),
            MdError::ConverterNotFound(_) => None,
        }
    }
}

impl From<ConfigError> for MdError {
    fn from(err: ConfigError) -> Self {
        MdError::Config(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display() {
        let err = MdError::ConverterNotFound("pdf".into());
        assert_eq!(err.to_string(), "Unknown output format: pdf");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_from_config_error() {
        let err: MdError = ConfigError::Message("bad".into()).into();
        assert!(matches!(err, MdError::Config(_)));
        assert!(err.to_string().contains("bad"));
        assert!(err.source().is_some());
    }
}
