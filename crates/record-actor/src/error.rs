//! # Framework Errors
//!
//! Errors raised by the record actor runtime itself, independent of any record type.

/// Errors that can occur within the record actor framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Record rejected: {0}")]
    Rejected(Box<dyn std::error::Error + Send + Sync>),
}
