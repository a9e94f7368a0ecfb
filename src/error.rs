//! Application-level error type.
//!
//! Every variant is fatal: `main` prints the message and exits with status 1.

use std::io;
use std::path::PathBuf;

use crate::ascii::RampError;
use crate::camera::CameraError;
use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Bad or missing command-line arguments
    #[error("{0}")]
    Usage(String),

    #[error("File could not be opened: {path}: {source}", path = .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Image could not be decoded: {0}")]
    ImageDecode(#[source] image::ImageError),

    #[error("Image could not be decoded: unsupported format {0}")]
    UnsupportedFormat(String),

    #[error("Capture failed: {0}")]
    Capture(#[from] CameraError),

    #[error("Terminal initialization failed: {0}")]
    TerminalInit(#[source] io::Error),

    #[error("Terminal write failed: {0}")]
    Terminal(#[source] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid density ramp: {0}")]
    Ramp(#[from] RampError),

    #[error("Failed to install signal handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

impl AppError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Whether the usage line should accompany the message.
    pub fn is_usage(&self) -> bool {
        matches!(self, AppError::Usage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_access_message_names_path() {
        let err = AppError::FileAccess {
            path: PathBuf::from("/nope/cat.png"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("File could not be opened"));
        assert!(msg.contains("/nope/cat.png"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_usage_flag() {
        assert!(AppError::Usage("missing input".into()).is_usage());
        assert!(!AppError::UnsupportedFormat("Gif".into()).is_usage());
    }

    #[test]
    fn test_camera_error_converts() {
        let err: AppError = CameraError::ReadFailed("timeout".into()).into();
        assert_eq!(err.to_string(), "Capture failed: Failed to read camera frame: timeout");
    }
}
