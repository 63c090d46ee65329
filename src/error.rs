use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum PickerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("No label resolves for entry id '{id}'")]
    MissingLabel { id: String },

    #[error("Invalid project name: {0}")]
    InvalidProjectName(String),

    #[error("Unknown project type: {0}")]
    UnknownProjectType(String),

    #[error("Failed to parse file structure payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PickerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = PickerError::MissingLabel {
            id: "src/app.py".to_string(),
        };
        assert!(err.to_string().contains("src/app.py"));
    }

    #[test]
    fn error_conversion() {
        let config_err = ConfigError::Invalid("test".into());
        let picker_err: PickerError = config_err.into();
        assert!(matches!(picker_err, PickerError::Config(_)));
    }

    #[test]
    fn invalid_name_message() {
        let err = PickerError::InvalidProjectName("must start with a letter".into());
        assert!(err.to_string().contains("must start with a letter"));
    }
}
