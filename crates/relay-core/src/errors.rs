//! Cross-cutting error types for Relay.
//!
//! Errors raised while a subject or delegate handles a call. Matcher and
//! configuration errors live in their own crates.

use thiserror::Error;

/// Errors a [`Receiver`](crate::Receiver) or [`Subject`](crate::Subject)
/// can return from a call.
#[derive(Debug, Error)]
pub enum CallError {
    /// The receiver does not implement the requested method.
    #[error("undefined method '{method}' for {receiver}")]
    NoSuchMethod { receiver: String, method: String },

    /// The accessor yielded no delegate object.
    #[error("'{accessor}' returned nothing, cannot send '{method}'")]
    NilDelegate { accessor: String, method: String },

    /// The method exists but rejected the supplied arguments.
    #[error("invalid arguments for '{method}': {reason}")]
    InvalidArguments { method: String, reason: String },

    /// Catch-all for failures raised by user code.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CallError {
    /// Shorthand for [`CallError::NoSuchMethod`].
    pub fn no_such_method(receiver: impl Into<String>, method: impl Into<String>) -> Self {
        Self::NoSuchMethod {
            receiver: receiver.into(),
            method: method.into(),
        }
    }
}
