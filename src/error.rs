//! Error types for loading the country dataset

use thiserror::Error;

/// Errors that can occur while fetching or decoding the dataset
#[derive(Debug, Error)]
pub enum LoadError {
    /// Request could not be sent or the body could not be read
    #[error("network error: {0}")]
    Http(String),

    /// Server answered with a non-success status
    #[error("unexpected HTTP status {code}")]
    Status { code: u16 },

    /// Body was not a JSON array of country records
    #[error("could not decode country data: {0}")]
    Decode(String),

    /// Local data file could not be read
    #[error("I/O error: {0}")]
    Io(String),

    /// Source returned zero records
    #[error("data source returned no countries")]
    Empty,

    /// Load job ended without sending a result
    #[error("loader stopped unexpectedly: {0}")]
    Internal(String),
}

impl LoadError {
    /// Text for the persistent error screen
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Http(_) => {
                "Could not reach the countries service. Check your internet connection and restart."
            }
            Self::Status { .. } => "The countries service returned an error. Try again later.",
            Self::Decode(_) => "The country data could not be understood.",
            Self::Io(_) => "The configured data file could not be read.",
            Self::Empty => "No countries were returned.",
            Self::Internal(_) => "Something went wrong while loading. Please restart the dashboard.",
        }
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_detail() {
        assert_eq!(LoadError::Status { code: 503 }.to_string(), "unexpected HTTP status 503");
        assert_eq!(
            LoadError::Io("missing".to_string()).to_string(),
            "I/O error: missing"
        );
    }

    #[test]
    fn test_json_errors_are_decode_failures() {
        let err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        assert!(matches!(LoadError::from(err), LoadError::Decode(_)));
    }

    #[test]
    fn test_user_messages_are_not_empty() {
        let errors = [
            LoadError::Http("x".into()),
            LoadError::Status { code: 500 },
            LoadError::Decode("x".into()),
            LoadError::Io("x".into()),
            LoadError::Empty,
            LoadError::Internal("x".into()),
        ];
        for err in &errors {
            assert!(!err.user_message().is_empty());
        }
    }
}
