//! # relay-core
//!
//! Core types shared by the Relay crates.
//!
//! This crate provides:
//! - The [`Receiver`] capability trait implemented by delegate objects
//! - The [`Subject`] trait implemented by objects under test
//! - [`Collaborators`], the injection context a subject fetches its delegates from
//! - [`InvocationRecord`] and argument formatting helpers
//! - Kind/mode enums and the cross-cutting [`CallError`]
//!
//! Arguments and return values are dynamically typed [`Value`]s so one
//! matcher can check any delegation, whatever the delegate's real signature.

pub mod collaborators;
pub mod enums;
pub mod errors;
pub mod invocation;
pub mod receiver;

pub use collaborators::Collaborators;
pub use enums::{SpyMode, SubjectKind};
pub use errors::CallError;
pub use invocation::{arguments_equal, format_arguments, InvocationRecord};
pub use receiver::{Receiver, Subject};

/// Argument and return value type for delegated calls.
///
/// Arrays compare element-wise in order; objects compare by key-value
/// equality, so keyword-style arguments match regardless of insertion order.
pub use serde_json::Value;
