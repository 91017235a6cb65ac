//! The delegation matcher and its builder.

use relay_config::MatcherConfig;
use relay_core::{Collaborators, Receiver, SpyMode, Subject, SubjectKind, Value};
use tracing::debug;

use crate::message;
use crate::outcome::{MatchResult, NilCheck};
use crate::spy::{CallLog, Spy};
use crate::MatchError;

/// Prefix applied to the subject-side method name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prefix {
    /// Use the accessor name, e.g. `mailman_deliver_mail`.
    Accessor,
    Custom(String),
}

/// What the matcher expects. Built through [`DelegateMethodMatcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherSpec {
    pub method: String,
    pub accessor: Option<String>,
    pub alias: Option<String>,
    /// Expected arguments; empty means any arguments are accepted.
    pub arguments: Vec<Value>,
    pub prefix: Option<Prefix>,
    pub allow_nil: bool,
}

impl MatcherSpec {
    /// Name of the method called on the subject.
    #[must_use]
    pub fn delegating_method(&self) -> String {
        let prefix = match &self.prefix {
            None => None,
            Some(Prefix::Accessor) => self.accessor.as_deref(),
            Some(Prefix::Custom(prefix)) => Some(prefix.as_str()),
        };
        match prefix {
            Some(prefix) => format!("{prefix}_{}", self.method),
            None => self.method.clone(),
        }
    }

    /// Name of the method expected on the delegate.
    #[must_use]
    pub fn delegate_method(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.method)
    }
}

/// Matcher for `delegate_method(..).to(..)` expectations.
#[derive(Debug, Clone)]
pub struct DelegateMethodMatcher {
    spec: MatcherSpec,
    spy_mode: SpyMode,
    max_listed_calls: usize,
}

/// Start a delegation expectation for the subject method `method`.
pub fn delegate_method(method: impl Into<String>) -> DelegateMethodMatcher {
    let config = MatcherConfig::default();
    DelegateMethodMatcher {
        spec: MatcherSpec {
            method: method.into(),
            accessor: None,
            alias: None,
            arguments: Vec::new(),
            prefix: None,
            allow_nil: false,
        },
        spy_mode: config.spy_mode,
        max_listed_calls: config.max_listed_calls,
    }
}

impl DelegateMethodMatcher {
    /// The accessor on the subject that returns the delegate.
    #[must_use]
    pub fn to(mut self, accessor: impl Into<String>) -> Self {
        self.spec.accessor = Some(accessor.into());
        self
    }

    /// Expect the delegate's `alias` method to be called instead of one with
    /// the subject method's name.
    #[must_use]
    pub fn as_method(mut self, alias: impl Into<String>) -> Self {
        self.spec.alias = Some(alias.into());
        self
    }

    /// Expected arguments of the delegated call. Numbers compare by value, so
    /// `2` matches a recorded `2.0`.
    #[must_use]
    pub fn with_arguments<I>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        self.spec.arguments = arguments.into_iter().collect();
        self
    }

    /// The subject method is `<prefix>_<method>`.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.spec.prefix = Some(Prefix::Custom(prefix.into()));
        self
    }

    /// The subject method is `<accessor>_<method>`.
    #[must_use]
    pub fn with_default_prefix(mut self) -> Self {
        self.spec.prefix = Some(Prefix::Accessor);
        self
    }

    /// Also require the subject method to succeed when the accessor yields nothing.
    #[must_use]
    pub fn allow_nil(mut self) -> Self {
        self.spec.allow_nil = true;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: &MatcherConfig) -> Self {
        self.spy_mode = config.spy_mode;
        self.max_listed_calls = config.max_listed_calls.max(1);
        self
    }

    #[must_use]
    pub const fn spec(&self) -> &MatcherSpec {
        &self.spec
    }

    /// Human-readable description for a subject of the given kind.
    #[must_use]
    pub fn description(&self, kind: SubjectKind) -> String {
        message::describe(&self.spec, kind)
    }

    /// Run the subject method with a spy standing in for the delegate.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::DelegateObjectNotSpecified`] if [`to`](Self::to)
    /// was never called, and [`MatchError::Invocation`] if the subject method
    /// fails while the spy is installed.
    pub fn matches<S>(&self, subject: &mut S) -> Result<MatchResult, MatchError>
    where
        S: Subject + ?Sized,
    {
        let accessor = self
            .spec
            .accessor
            .as_deref()
            .ok_or(MatchError::DelegateObjectNotSpecified)?;
        let subject_name = subject.name();
        let kind = subject.kind();
        let delegating = self.spec.delegating_method();
        let expected_method = self.spec.delegate_method();

        let (calls, delegate_calls) = {
            let mut interception = Interception::install(&*subject, accessor, self.spy_mode);
            subject
                .invoke(
                    &delegating,
                    &self.spec.arguments,
                    &mut interception.collaborators,
                )
                .map_err(|source| MatchError::Invocation {
                    subject: subject_name.clone(),
                    method: delegating.clone(),
                    source,
                })?;
            (
                interception.log.calls(),
                interception.log.calls_to(expected_method),
            )
        };

        let delegated = if self.spec.arguments.is_empty() {
            !delegate_calls.is_empty()
        } else {
            delegate_calls
                .iter()
                .any(|call| call.is_call_to(expected_method, &self.spec.arguments))
        };

        let nil_check = if self.spec.allow_nil {
            self.check_nil(subject, accessor, &delegating)
        } else {
            NilCheck::NotRequested
        };

        debug!(
            subject = %subject_name,
            %kind,
            method = %delegating,
            calls = calls.len(),
            delegated,
            "delegation checked"
        );

        Ok(MatchResult {
            spec: self.spec.clone(),
            subject: subject_name,
            kind,
            calls,
            delegated,
            nil_check,
            max_listed_calls: self.max_listed_calls,
        })
    }

    fn check_nil<S>(&self, subject: &mut S, accessor: &str, delegating: &str) -> NilCheck
    where
        S: Subject + ?Sized,
    {
        let mut collaborators = Collaborators::new();
        collaborators.inject(accessor, None);
        match subject.invoke(delegating, &self.spec.arguments, &mut collaborators) {
            Ok(_) => NilCheck::Passed,
            Err(error) => {
                debug!(accessor, method = delegating, %error, "nil delegate not tolerated");
                NilCheck::Failed(error.to_string())
            }
        }
    }
}

/// A spy injected under one accessor for the span of one invocation.
///
/// Dropping it (normally or while unwinding) releases the spy and the real
/// delegate it wraps.
struct Interception {
    collaborators: Collaborators,
    log: CallLog,
}

impl Interception {
    fn install<S>(subject: &S, accessor: &str, mode: SpyMode) -> Self
    where
        S: Subject + ?Sized,
    {
        let spy = Spy::new(subject.delegate(accessor), mode);
        let log = spy.log();
        debug!(accessor, mode = %spy.mode(), delegate = spy.type_name(), "spy installed");
        let mut collaborators = Collaborators::new();
        collaborators.inject(accessor, Some(Box::new(spy)));
        Self { collaborators, log }
    }
}

impl Drop for Interception {
    fn drop(&mut self) {
        debug!(calls = self.log.len(), "spy released");
    }
}
