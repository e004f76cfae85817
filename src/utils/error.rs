use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Settings encoding error: {0}")]
    SettingsEncode(#[from] toml::ser::Error),

    #[error("Settings parse error in {path}: {message}")]
    SettingsParse { path: String, message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to fetch Google Doc {doc_id}: {reason}")]
    DocumentFetch { doc_id: String, reason: String },

    #[error("Page extraction failed: {message}")]
    Extraction { message: String },

    #[error("Page agent answered {request} with unexpected {found} result")]
    UnexpectedResult { request: String, found: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Extraction,
    Internal,
}

impl RelayError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RelayError::SettingsParse { .. }
            | RelayError::SettingsEncode(_)
            | RelayError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            RelayError::Http(_) | RelayError::DocumentFetch { .. } => ErrorCategory::Network,
            RelayError::Extraction { .. } | RelayError::UnexpectedResult { .. } => {
                ErrorCategory::Extraction
            }
            RelayError::Io(_) | RelayError::Serialization(_) => ErrorCategory::Internal,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RelayError::InvalidConfigValue { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            RelayError::SettingsParse { path, .. } => {
                format!("Could not read settings file {}", path)
            }
            RelayError::DocumentFetch { doc_id, .. } => {
                format!("Could not export Google Doc {}", doc_id)
            }
            RelayError::Http(_) => "Network request failed".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
