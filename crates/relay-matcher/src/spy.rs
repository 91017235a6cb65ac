//! Recording decorator for delegate objects.

use std::cell::RefCell;
use std::rc::Rc;

use relay_core::{CallError, InvocationRecord, Receiver, SpyMode, Value};
use tracing::trace;

/// Shared handle to the calls a [`Spy`] has recorded.
///
/// Cloning the handle shares the log, so the matcher can keep reading it
/// after the spy itself has been moved into the subject's collaborators.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<InvocationRecord>>>,
}

impl CallLog {
    fn record(&self, method: &str, args: &[Value]) {
        self.calls
            .borrow_mut()
            .push(InvocationRecord::new(method, args));
    }

    /// All recorded calls, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<InvocationRecord> {
        self.calls.borrow().clone()
    }

    /// Recorded calls to `method` only.
    #[must_use]
    pub fn calls_to(&self, method: &str) -> Vec<InvocationRecord> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.method == method)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }
}

/// Wraps a delegate, recording every call sent to it.
///
/// The wrapped object is optional: a record-only spy does not need the real
/// delegate at all.
pub struct Spy {
    inner: Option<Box<dyn Receiver>>,
    mode: SpyMode,
    log: CallLog,
}

impl Spy {
    #[must_use]
    pub fn new(inner: Option<Box<dyn Receiver>>, mode: SpyMode) -> Self {
        Self {
            inner,
            mode,
            log: CallLog::default(),
        }
    }

    /// A handle to this spy's call log.
    #[must_use]
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }

    #[must_use]
    pub const fn mode(&self) -> SpyMode {
        self.mode
    }
}

impl Receiver for Spy {
    fn type_name(&self) -> &str {
        self.inner.as_ref().map_or("Spy", |inner| inner.type_name())
    }

    fn receive(&mut self, method: &str, args: &[Value]) -> Result<Value, CallError> {
        trace!(method, args = args.len(), mode = %self.mode, "spy received call");
        self.log.record(method, args);

        match (self.mode, self.inner.as_mut()) {
            (SpyMode::PassThrough, Some(inner)) => inner.receive(method, args),
            _ => Ok(Value::Null),
        }
    }
}
