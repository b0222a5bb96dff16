// SPDX-License-Identifier: MPL-2.0

//! Error types for the control widgets

use std::fmt;
use std::path::PathBuf;

/// Result type alias using ControlsError
pub type ControlsResult<T> = Result<T, ControlsError>;

/// Main error type of the crate
#[derive(Debug)]
pub enum ControlsError {
    /// Sound loading or playback errors
    Sound(SoundError),
    /// Configuration errors
    Config(String),
    /// Storage/filesystem errors
    Storage(String),
    /// Generic error with message
    Other(String),
}

/// Sound-specific errors
#[derive(Debug)]
pub enum SoundError {
    /// No audio output device could be opened
    OutputUnavailable(String),
    /// A clip file could not be read
    LoadFailed {
        /// Path of the clip file
        path: PathBuf,
        /// Underlying I/O error
        reason: String,
    },
    /// A clip file could not be decoded
    DecodeFailed {
        /// Path of the clip file
        path: PathBuf,
        /// Underlying decoder error
        reason: String,
    },
}

impl fmt::Display for ControlsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlsError::Sound(e) => write!(f, "Sound error: {}", e),
            ControlsError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ControlsError::Storage(msg) => write!(f, "Storage error: {}", msg),
            ControlsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for SoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoundError::OutputUnavailable(msg) => {
                write!(f, "Audio output unavailable: {}", msg)
            }
            SoundError::LoadFailed { path, reason } => {
                write!(f, "Failed to load {}: {}", path.display(), reason)
            }
            SoundError::DecodeFailed { path, reason } => {
                write!(f, "Failed to decode {}: {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for ControlsError {}
impl std::error::Error for SoundError {}

// Conversions from sub-errors to ControlsError
impl From<SoundError> for ControlsError {
    fn from(err: SoundError) -> Self {
        ControlsError::Sound(err)
    }
}

impl From<String> for ControlsError {
    fn from(msg: String) -> Self {
        ControlsError::Other(msg)
    }
}

impl From<&str> for ControlsError {
    fn from(msg: &str) -> Self {
        ControlsError::Other(msg.to_string())
    }
}

// Conversion for I/O errors
impl From<std::io::Error> for ControlsError {
    fn from(err: std::io::Error) -> Self {
        ControlsError::Storage(err.to_string())
    }
}
