use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SetupError>;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Extraction failed for {path}: {message}")]
    ExtractionError { path: PathBuf, message: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },
}

impl SetupError {
    pub fn extraction_error<S: Into<String>>(path: impl Into<PathBuf>, message: S) -> Self {
        SetupError::ExtractionError {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_error_message() {
        let err = SetupError::extraction_error("ruffle.zip", "bad header");
        assert_eq!(
            err.to_string(),
            "Extraction failed for ruffle.zip: bad header"
        );
    }

    #[test]
    fn test_http_status_message() {
        let err = SetupError::HttpStatus {
            url: "https://example.invalid/a.zip".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "HTTP 404 for https://example.invalid/a.zip"
        );
    }
}
