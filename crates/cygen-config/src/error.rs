//! Configuration errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_error() {
        let err = ConfigError::InvalidValue {
            field: "dataAttribute".to_string(),
            message: "must not contain whitespace".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("dataAttribute"));
        assert!(display.contains("must not contain whitespace"));
    }

    #[test]
    fn test_error_debug() {
        let err = ConfigError::InvalidValue {
            field: "f".to_string(),
            message: "m".to_string(),
        };
        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidValue"));
    }
}
