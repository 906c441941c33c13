//! Error types for signature capture

use ramsign_types::StoreError;
use thiserror::Error;

/// Errors from the capture pad
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Signature is not ready to commit")]
    NotReady,

    #[error("Style index out of range: {0}")]
    StyleOutOfRange(usize),

    #[error("Failed to encode drawing surface: {0}")]
    PngEncoding(#[from] png::EncodingError),
}

/// Errors from submitting a signing session
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Signature capture failed: {0}")]
    Capture(#[from] CaptureError),

    #[error("Signature store rejected the submission: {0}")]
    Store(#[from] StoreError),

    #[error("Session already holds a stored signature")]
    AlreadySigned,
}
