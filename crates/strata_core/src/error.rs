//! Error types for strata_core

use thiserror::Error;

/// Errors that can occur when reading component state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// The owning instance was unmounted and its signals disposed
    #[error("signal was disposed when its owner unmounted")]
    SignalDisposed,

    /// The signal holds a value of another type
    #[error("signal does not hold a value of type {expected}")]
    TypeMismatch { expected: &'static str },
}

/// Result type for strata_core operations
pub type Result<T> = std::result::Result<T, ScopeError>;
