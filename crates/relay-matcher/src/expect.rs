//! `expect(subject).to(matcher)` style assertions.

use relay_core::Subject;
use tracing::debug;

use crate::{DelegateMethodMatcher, ExpectationError};

/// Begin an expectation about `subject`.
pub fn expect<S>(subject: &mut S) -> Expectation<'_, S>
where
    S: Subject + ?Sized,
{
    Expectation { subject }
}

/// A pending expectation. Evaluates immediately when `to`/`not_to` is called.
pub struct Expectation<'a, S: ?Sized> {
    subject: &'a mut S,
}

impl<S> Expectation<'_, S>
where
    S: Subject + ?Sized,
{
    /// Panic with the failure message unless `matcher` passes.
    ///
    /// # Panics
    ///
    /// When the delegation did not happen, or the matcher is misconfigured.
    #[track_caller]
    pub fn to(self, matcher: &DelegateMethodMatcher) {
        if let Err(error) = self.try_to(matcher) {
            panic!("{error}");
        }
    }

    /// Panic with the failure message if `matcher` passes.
    ///
    /// # Panics
    ///
    /// When the delegation happened, or the matcher is misconfigured.
    #[track_caller]
    pub fn not_to(self, matcher: &DelegateMethodMatcher) {
        if let Err(error) = self.try_not_to(matcher) {
            panic!("{error}");
        }
    }

    /// # Errors
    ///
    /// [`ExpectationError::Failed`] with the failure message, or
    /// [`ExpectationError::Match`] when the matcher could not run.
    pub fn try_to(self, matcher: &DelegateMethodMatcher) -> Result<(), ExpectationError> {
        let result = matcher.matches(self.subject)?;
        debug!(passed = result.passed(), "positive delegation expectation");
        if result.passed() {
            Ok(())
        } else {
            Err(ExpectationError::Failed(result.failure_message()))
        }
    }

    /// # Errors
    ///
    /// [`ExpectationError::Failed`] with the negated failure message, or
    /// [`ExpectationError::Match`] when the matcher could not run.
    pub fn try_not_to(self, matcher: &DelegateMethodMatcher) -> Result<(), ExpectationError> {
        let result = matcher.matches(self.subject)?;
        debug!(passed = !result.passed(), "negated delegation expectation");
        if result.passed() {
            Err(ExpectationError::Failed(
                result.failure_message_when_negated(),
            ))
        } else {
            Ok(())
        }
    }
}
