use std::cmp::Ordering;

use super::Comparator;
use crate::util::error::UnsupportedKind;
use crate::value::Value;

/// Orders strings by case-folded lexicographic comparison. Rejects integers.
///
/// Folding lowercases each byte in the ASCII range before comparing, so `"Apple"` and `"apple"`
/// compare equal while bytes outside the ASCII range compare verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseInsensitiveText;

fn folded(s: &str) -> impl Iterator<Item = u8> + '_ {
    s.bytes().map(|byte| byte.to_ascii_lowercase())
}

impl Comparator for CaseInsensitiveText {
    fn compare(&self, a: &Value, b: &Value) -> Result<Ordering, UnsupportedKind> {
        match (a, b) {
            (Value::Text(a), Value::Text(b)) => Ok(folded(a).cmp(folded(b))),
            _ => Err(UnsupportedKind {
                policy: "CaseInsensitiveText",
                found: if a.is_int() { a.kind() } else { b.kind() },
            }),
        }
    }
}
