//! Subject kinds and spy modes.
//!
//! Both enums use `snake_case` serialization so they can appear in
//! configuration files.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SubjectKind
// ---------------------------------------------------------------------------

/// Whether the subject under test is an instance or a class-level (static)
/// object. Drives the method notation used in descriptions and messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    #[default]
    Instance,
    Class,
}

impl SubjectKind {
    /// Method notation prefix: `#` for instance methods, `.` for class methods.
    #[must_use]
    pub const fn indicator(self) -> char {
        match self {
            Self::Instance => '#',
            Self::Class => '.',
        }
    }

    /// Render `name` with this kind's method notation, e.g. `#deliver_mail`.
    #[must_use]
    pub fn qualify(self, name: &str) -> String {
        format!("{}{name}", self.indicator())
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Instance => "instance",
            Self::Class => "class",
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SpyMode
// ---------------------------------------------------------------------------

/// What a spy does with a call after recording it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpyMode {
    /// Record the call and return `Null` without running the real method.
    #[default]
    RecordOnly,
    /// Record the call, then forward it to the wrapped delegate.
    PassThrough,
}

impl SpyMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RecordOnly => "record_only",
            Self::PassThrough => "pass_through",
        }
    }
}

impl fmt::Display for SpyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
