//! Recorded invocations and argument rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Value;

/// One call received by a delegate: the method name and its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationRecord {
    pub method: String,
    pub arguments: Vec<Value>,
}

impl InvocationRecord {
    pub fn new(method: impl Into<String>, arguments: &[Value]) -> Self {
        Self {
            method: method.into(),
            arguments: arguments.to_vec(),
        }
    }

    /// Whether this call went to `method` with `arguments`.
    ///
    /// Values compare as with [`arguments_equal`].
    #[must_use]
    pub fn is_call_to(&self, method: &str, arguments: &[Value]) -> bool {
        self.method == method && arguments_equal(&self.arguments, arguments)
    }
}

/// Renders as `deliver_mail(1, "two")`.
impl fmt::Display for InvocationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.method)?;
        write_joined(f, &self.arguments)?;
        f.write_str(")")
    }
}

/// Compare two argument lists element-wise.
///
/// Equality is structural, except that numbers compare by numeric value:
/// `2` and `2.0` are the same argument.
#[must_use]
pub fn arguments_equal(left: &[Value], right: &[Value]) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(l, r)| value_equal(l, r))
}

fn value_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => match (l.as_i64(), r.as_i64()) {
            (Some(l), Some(r)) => l == r,
            _ => match (l.as_u64(), r.as_u64()) {
                (Some(l), Some(r)) => l == r,
                _ => l.as_f64() == r.as_f64(),
            },
        },
        (Value::Array(l), Value::Array(r)) => arguments_equal(l, r),
        (Value::Object(l), Value::Object(r)) => {
            l.len() == r.len()
                && l.iter()
                    .all(|(key, value)| r.get(key).is_some_and(|other| value_equal(value, other)))
        }
        _ => left == right,
    }
}

/// Render an argument list as `[1, "two", {"three":3}]`.
#[must_use]
pub fn format_arguments(arguments: &[Value]) -> String {
    struct Bracketed<'a>(&'a [Value]);

    impl fmt::Display for Bracketed<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("[")?;
            write_joined(f, self.0)?;
            f.write_str("]")
        }
    }

    Bracketed(arguments).to_string()
}

fn write_joined(f: &mut fmt::Formatter<'_>, values: &[Value]) -> fmt::Result {
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}
