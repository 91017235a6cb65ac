//! Post office fixtures shared by the integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::anyhow;
use relay_core::{CallError, Collaborators, Receiver, Subject, SubjectKind, Value};
use serde_json::json;

pub const HOLMES: &str = "221B Baker Street";

/// Delegate whose real deliveries land in a shared mailbag.
pub struct Mailman {
    mailbag: Rc<RefCell<Vec<String>>>,
}

impl Receiver for Mailman {
    fn type_name(&self) -> &str {
        "Mailman"
    }

    fn receive(&mut self, method: &str, _args: &[Value]) -> Result<Value, CallError> {
        match method {
            "deliver_mail" | "deliver_mail_and_avoid_dogs" => {
                self.mailbag.borrow_mut().push(method.to_string());
                Ok(json!("delivered"))
            }
            "ring_bell" => Ok(json!("ding")),
            _ => Err(CallError::no_such_method(self.type_name(), method)),
        }
    }
}

/// Subject under test. Builds a fresh [`Mailman`] every time the `mailman`
/// accessor is read.
#[derive(Default)]
pub struct PostOffice {
    kind: SubjectKind,
    mailbag: Rc<RefCell<Vec<String>>>,
    mailmen_hired: Rc<Cell<usize>>,
}

impl PostOffice {
    pub fn new() -> Self {
        Self::default()
    }

    /// The class-level flavour of the post office.
    pub fn class() -> Self {
        Self {
            kind: SubjectKind::Class,
            ..Self::default()
        }
    }

    pub fn with_kind(kind: SubjectKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Deliveries the real mailman has made.
    pub fn mailbag(&self) -> Vec<String> {
        self.mailbag.borrow().clone()
    }

    pub fn mailmen_hired(&self) -> usize {
        self.mailmen_hired.get()
    }

    fn mailman(&self) -> Option<Box<dyn Receiver>> {
        self.mailmen_hired.set(self.mailmen_hired.get() + 1);
        Some(Box::new(Mailman {
            mailbag: Rc::clone(&self.mailbag),
        }))
    }

    fn send_to_mailman(
        &self,
        collaborators: &mut Collaborators,
        method: &str,
        args: &[Value],
    ) -> Result<Value, CallError> {
        collaborators
            .require("mailman", method, || self.mailman())?
            .receive(method, args)
    }

    // Not part of any public surface: reached only through `invoke`.
    fn deliver_mail_privately(&self, collaborators: &mut Collaborators) -> Result<Value, CallError> {
        self.send_to_mailman(collaborators, "deliver_mail", &[])
    }
}

impl Subject for PostOffice {
    fn name(&self) -> String {
        "PostOffice".to_string()
    }

    fn kind(&self) -> SubjectKind {
        self.kind
    }

    fn delegate(&self, accessor: &str) -> Option<Box<dyn Receiver>> {
        match accessor {
            "mailman" => self.mailman(),
            _ => None,
        }
    }

    fn invoke(
        &mut self,
        method: &str,
        args: &[Value],
        collaborators: &mut Collaborators,
    ) -> Result<Value, CallError> {
        match method {
            "deliver_mail" | "mailman_deliver_mail" | "courier_deliver_mail" => {
                self.send_to_mailman(collaborators, "deliver_mail", args)
            }
            "deliver_mail_safely" => {
                self.send_to_mailman(collaborators, "deliver_mail_and_avoid_dogs", args)
            }
            "deliver_mail_to_holmes" => {
                self.send_to_mailman(collaborators, "deliver_mail", &[json!(HOLMES)])
            }
            "deliver_mail_if_staffed" => match collaborators.delegate("mailman", || self.mailman()) {
                Some(mailman) => mailman.receive("deliver_mail", args),
                None => Ok(Value::Null),
            },
            "deliver_mail_in_rounds" => {
                self.send_to_mailman(collaborators, "ring_bell", &[])?;
                self.send_to_mailman(collaborators, "deliver_mail", &[json!("first round")])?;
                self.send_to_mailman(collaborators, "deliver_mail", &[json!("second round")])
            }
            "deliver_mail_secretly" => self.deliver_mail_privately(collaborators),
            "hide_mail" => Ok(Value::Null),
            "lose_mail" => Err(CallError::from(anyhow!("the mail was lost"))),
            "flood_mailman" => {
                for n in 1..=5 {
                    self.send_to_mailman(collaborators, "deliver_mail", &[json!(n)])?;
                }
                Ok(Value::Null)
            }
            "panic_at_the_counter" => panic!("counter on fire"),
            _ => Err(CallError::no_such_method("PostOffice", method)),
        }
    }
}
