//! Capability traits for delegates and subjects.

use crate::{CallError, Collaborators, SubjectKind, Value};

/// An object that accepts calls by method name.
///
/// Delegates implement this so they can be wrapped by a spy or any other
/// decorator exposing the same interface.
pub trait Receiver {
    /// Display name of the receiver's type, used in error messages.
    fn type_name(&self) -> &str;

    /// Handle a call to `method` with `args`.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::NoSuchMethod`] for methods the receiver does not
    /// implement, or whatever error the method itself raises.
    fn receive(&mut self, method: &str, args: &[Value]) -> Result<Value, CallError>;
}

impl<R: Receiver + ?Sized> Receiver for Box<R> {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn receive(&mut self, method: &str, args: &[Value]) -> Result<Value, CallError> {
        (**self).receive(method, args)
    }
}

/// An object whose methods are under test.
///
/// The subject fetches its delegates through the [`Collaborators`] passed to
/// [`invoke`](Subject::invoke) instead of building them directly, which is
/// where a matcher injects its spy.
pub trait Subject {
    /// Display name used in messages, e.g. `PostOffice`.
    fn name(&self) -> String;

    /// Instance or class-level subject.
    fn kind(&self) -> SubjectKind {
        SubjectKind::Instance
    }

    /// Build the object `accessor` returns, or `None` when it yields nothing.
    fn delegate(&self, accessor: &str) -> Option<Box<dyn Receiver>>;

    /// Run `method` with `args`, resolving delegates through `collaborators`.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::NoSuchMethod`] for unknown methods, or whatever the
    /// method raises.
    fn invoke(
        &mut self,
        method: &str,
        args: &[Value],
        collaborators: &mut Collaborators,
    ) -> Result<Value, CallError>;

    /// Call `method` without any injected collaborators.
    ///
    /// # Errors
    ///
    /// Same as [`invoke`](Subject::invoke).
    fn call(&mut self, method: &str, args: &[Value]) -> Result<Value, CallError> {
        self.invoke(method, args, &mut Collaborators::new())
    }
}
