//! Collaborator failures
//!
//! The simulation itself cannot fail. These errors come from the browser
//! side (storage, audio, canvas) and are logged and skipped by the driver.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("storage is not available")]
    StorageUnavailable,
    #[error("failed to read storage key `{key}`: {reason}")]
    StorageRead { key: String, reason: String },
    #[error("failed to write storage key `{key}`: {reason}")]
    StorageWrite { key: String, reason: String },
    #[error("audio is not available")]
    AudioUnavailable,
    #[error("audio playback rejected: {0}")]
    AudioRejected(String),
    #[error("render surface is not available")]
    SurfaceUnavailable,
}
