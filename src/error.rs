use thiserror::Error;

use crate::validate::Expected;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for option '--{option}': expected {expected}")]
    InvalidValue {
        option: &'static str,
        value: String,
        expected: Expected,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_formats_correctly() {
        let err = ConfigError::InvalidValue {
            option: "manifest-url",
            value: "not a url".into(),
            expected: Expected::Url,
        };
        let msg = err.to_string();
        assert!(msg.contains("--manifest-url"));
        assert!(msg.contains("not a url"));
        assert!(msg.contains("URL"));
    }

    #[test]
    fn invalid_value_names_boolean_category() {
        let err = ConfigError::InvalidValue {
            option: "offline",
            value: "maybe".into(),
            expected: Expected::Bool,
        };
        assert!(err.to_string().contains("boolean"));
    }
}
