//! Match verdicts and their messages.

use relay_core::{InvocationRecord, SubjectKind};

use crate::message;
use crate::MatcherSpec;

/// Outcome of calling the subject with the accessor yielding nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NilCheck {
    NotRequested,
    Passed,
    Failed(String),
}

/// Verdict of one [`matches`](crate::DelegateMethodMatcher::matches) call.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub(crate) spec: MatcherSpec,
    pub(crate) subject: String,
    pub(crate) kind: SubjectKind,
    pub(crate) calls: Vec<InvocationRecord>,
    pub(crate) delegated: bool,
    pub(crate) nil_check: NilCheck,
    pub(crate) max_listed_calls: usize,
}

impl MatchResult {
    /// Whether the delegation happened as expected (and, with `allow_nil`,
    /// the subject tolerated a missing delegate).
    #[must_use]
    pub fn passed(&self) -> bool {
        self.delegated && !matches!(self.nil_check, NilCheck::Failed(_))
    }

    /// Whether the expected call reached the delegate, ignoring the nil check.
    #[must_use]
    pub const fn delegated(&self) -> bool {
        self.delegated
    }

    /// Every call the delegate received, in order.
    #[must_use]
    pub fn calls(&self) -> &[InvocationRecord] {
        &self.calls
    }

    #[must_use]
    pub const fn kind(&self) -> SubjectKind {
        self.kind
    }

    #[must_use]
    pub fn description(&self) -> String {
        message::describe(&self.spec, self.kind)
    }

    /// Message for a positive expectation that did not hold.
    #[must_use]
    pub fn failure_message(&self) -> String {
        let mut message = format!(
            "Expected {} to {}, but it did not.",
            self.subject,
            self.description()
        );
        let accessor = self.spec.accessor.as_deref().unwrap_or_default();

        if !self.delegated {
            message.push_str("\n\n");
            message.push_str(&message::calls_paragraph(
                &self.subject,
                self.kind,
                accessor,
                &self.calls,
                self.max_listed_calls,
            ));
        }

        if let NilCheck::Failed(error) = &self.nil_check {
            message.push_str("\n\n");
            message.push_str(&message::nil_paragraph(
                self.kind,
                accessor,
                &self.spec.delegating_method(),
                error,
            ));
        }

        message
    }

    /// Message for a negated expectation that did not hold.
    #[must_use]
    pub fn failure_message_when_negated(&self) -> String {
        format!(
            "Expected {} not to {}, but it did.",
            self.subject,
            self.description()
        )
    }
}
