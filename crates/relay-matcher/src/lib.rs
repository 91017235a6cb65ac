//! # relay-matcher
//!
//! Checks that a subject's method delegates to a collaborator.
//!
//! ```no_run
//! # use relay_core::Subject;
//! # fn post_office() -> Box<dyn Subject> { unimplemented!() }
//! use relay_matcher::{delegate_method, expect};
//! use serde_json::json;
//!
//! let mut office = post_office();
//! expect(office.as_mut()).to(
//!     &delegate_method("deliver_mail")
//!         .to("mailman")
//!         .with_arguments([json!("221B Baker Street")]),
//! );
//! ```
//!
//! During a match the delegate is wrapped in a recording [`Spy`] and injected
//! into the subject through [`relay_core::Collaborators`]. Nothing on the
//! subject or the real delegate is modified, so there is nothing to restore
//! once the match is over.

mod error;
mod expect;
mod matcher;
mod message;
mod outcome;
mod spy;

pub use error::{ExpectationError, MatchError};
pub use expect::{expect, Expectation};
pub use matcher::{delegate_method, DelegateMethodMatcher, MatcherSpec, Prefix};
pub use outcome::MatchResult;
pub use spy::{CallLog, Spy};
