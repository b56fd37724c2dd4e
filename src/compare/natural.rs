use std::cmp::Ordering;

use super::Comparator;
use crate::util::error::UnsupportedKind;
use crate::value::Value;

/// The default ordering policy: integers ascending numerically, strings ascending
/// lexicographically by code point.
///
/// Natural accepts either kind in a single call; when the two sides differ in kind, any integer
/// orders before any string. (A list using Natural still enforces its own single-kind rule, so it
/// only ever feeds same-kind pairs through here. The mixed-kind order matters when Natural is used
/// directly.)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl Comparator for Natural {
    fn compare(&self, a: &Value, b: &Value) -> Result<Ordering, UnsupportedKind> {
        Ok(a.cmp(b))
    }
}
