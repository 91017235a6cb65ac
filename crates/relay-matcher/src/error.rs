use relay_core::CallError;
use thiserror::Error;

/// Errors that stop a match before a verdict is reached.
///
/// A delegation that simply did not happen is not an error; it is a
/// [`MatchResult`](crate::MatchResult) that did not pass.
#[derive(Debug, Error)]
pub enum MatchError {
    /// `to(...)` was never called on the matcher.
    #[error("delegate object not specified")]
    DelegateObjectNotSpecified,

    /// The method under test itself failed.
    #[error("calling {method} on {subject} failed: {source}")]
    Invocation {
        subject: String,
        method: String,
        #[source]
        source: CallError,
    },
}

/// Why an expectation did not hold.
#[derive(Debug, Error)]
pub enum ExpectationError {
    /// The matcher could not run.
    #[error(transparent)]
    Match(#[from] MatchError),

    /// The matcher ran and the expectation failed; carries the failure message.
    #[error("{0}")]
    Failed(String),
}
