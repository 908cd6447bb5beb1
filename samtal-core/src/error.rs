//! Error types for the Samtal core library.
//!
//! Nothing in this demo is fatal past startup: a failed logo fetch falls
//! back to a glyph, a failed validation keeps the modal open, and a closed
//! event channel simply ends the driver. The variants below cover the
//! handful of things that can actually go wrong while wiring the demo up.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for the Samtal core library.
#[derive(Debug, Error)]
pub enum SamtalError {
    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A configuration value failed validation.
    #[error("invalid configuration value for {key}: {message}")]
    InvalidConfig { key: String, message: String },

    /// A script file was requested but could not be used.
    #[error("script file {path}: {message}")]
    ScriptFile { path: PathBuf, message: String },

    /// A script file failed to parse as TOML.
    #[error("script file parse error: {0}")]
    ScriptParse(#[from] toml::de::Error),

    /// A conversation script violated a structural rule.
    #[error("invalid script '{name}': {message}")]
    InvalidScript { name: String, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SamtalError>;

impl SamtalError {
    pub fn invalid_config(key: impl Into<String>, message: impl Into<String>) -> Self {
        SamtalError::InvalidConfig {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn invalid_script(name: impl Into<String>, message: impl Into<String>) -> Self {
        SamtalError::InvalidScript {
            name: name.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SamtalError::invalid_config("chat.visible_cap", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid configuration value for chat.visible_cap: must be at least 1"
        );
    }

    #[test]
    fn test_invalid_script_display() {
        let err = SamtalError::invalid_script("onboarding", "more than one booking sentinel");
        assert!(err.to_string().contains("onboarding"));
        assert!(err.to_string().contains("sentinel"));
    }
}
