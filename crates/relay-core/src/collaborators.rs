//! Injection context for a subject's delegates.

use std::collections::HashMap;
use std::fmt;

use crate::{CallError, Receiver};

/// Delegate objects available to one subject invocation, keyed by accessor.
///
/// A slot is filled either up front with [`inject`](Self::inject) or lazily
/// the first time the subject asks for it. Every lookup of the same accessor
/// during one invocation returns the same object, even when the subject's own
/// accessor would build a fresh one per call.
#[derive(Default)]
pub struct Collaborators {
    slots: HashMap<String, Option<Box<dyn Receiver>>>,
}

impl Collaborators {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the object `accessor` yields. `None` makes the accessor yield nothing.
    pub fn inject(&mut self, accessor: impl Into<String>, receiver: Option<Box<dyn Receiver>>) {
        self.slots.insert(accessor.into(), receiver);
    }

    /// The object behind `accessor`, calling `resolve` if the slot is empty.
    pub fn delegate<F>(&mut self, accessor: &str, resolve: F) -> Option<&mut dyn Receiver>
    where
        F: FnOnce() -> Option<Box<dyn Receiver>>,
    {
        match self.slots.entry(accessor.to_string()).or_insert_with(resolve) {
            Some(receiver) => Some(receiver.as_mut()),
            None => None,
        }
    }

    /// Like [`delegate`](Self::delegate), but an absent object is an error
    /// naming the `method` the subject was about to send.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::NilDelegate`] when the accessor yields nothing.
    pub fn require<F>(
        &mut self,
        accessor: &str,
        method: &str,
        resolve: F,
    ) -> Result<&mut dyn Receiver, CallError>
    where
        F: FnOnce() -> Option<Box<dyn Receiver>>,
    {
        self.delegate(accessor, resolve)
            .ok_or_else(|| CallError::NilDelegate {
                accessor: accessor.to_string(),
                method: method.to_string(),
            })
    }
}

impl fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (accessor, slot) in &self.slots {
            map.entry(accessor, &slot.as_ref().map(|receiver| receiver.type_name()));
        }
        map.finish()
    }
}
