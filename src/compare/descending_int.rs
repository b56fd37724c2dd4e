use std::cmp::Ordering;

use super::Comparator;
use crate::util::error::UnsupportedKind;
use crate::value::Value;

/// Orders integers in descending numeric order. Rejects strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DescendingInt;

impl Comparator for DescendingInt {
    fn compare(&self, a: &Value, b: &Value) -> Result<Ordering, UnsupportedKind> {
        match (a, b) {
            (Value::Int(a), Value::Int(b)) => Ok(b.cmp(a)),
            _ => Err(UnsupportedKind {
                policy: "DescendingInt",
                found: if a.is_text() { a.kind() } else { b.kind() },
            }),
        }
    }
}
