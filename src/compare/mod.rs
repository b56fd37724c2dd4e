//! A module containing [`Comparator`] and the provided ordering policies.
//!
//! A [`SortedList`](crate::list::SortedList) never compares two values itself; it hands every
//! ordering decision to the policy it was constructed with. [`Natural`] is the default, with
//! [`DescendingInt`] and [`CaseInsensitiveText`] provided as alternatives. Custom policies are
//! first-class: implement [`Comparator`] on any type, or wrap a closure in [`FromFn`] for a
//! one-off ordering.

use std::cmp::Ordering;

mod case_insensitive;
mod descending_int;
mod natural;

pub use case_insensitive::*;
pub use descending_int::*;
pub use natural::*;

#[doc(inline)]
pub use crate::util::error::UnsupportedKind;
use crate::value::Value;

/// A pluggable total-order policy over [`Value`]s.
///
/// Implementations must be consistent: repeated calls with the same inputs return the same
/// [`Ordering`], equal is symmetric and the order is transitive. A policy defined over only one
/// [`Kind`](crate::value::Kind) rejects values of the other with [`UnsupportedKind`] rather than
/// inventing an order for them. Policies are stateless from the list's perspective and must not
/// mutate anything through `compare`.
pub trait Comparator {
    /// Compares `a` to `b` under this policy.
    fn compare(&self, a: &Value, b: &Value) -> Result<Ordering, UnsupportedKind>;
}

/// A policy built from a plain comparison closure.
///
/// ```
/// use sorted_list::{Comparator, FromFn, Natural, SortedList, Value};
///
/// let reverse = FromFn(|a: &Value, b: &Value| Natural.compare(b, a));
/// let mut list = SortedList::with_comparator(reverse);
///
/// list.insert(Value::Int(1))?;
/// list.insert(Value::Int(3))?;
/// list.insert(Value::Int(2))?;
/// assert_eq!(list.to_vec(), [Value::Int(3), Value::Int(2), Value::Int(1)]);
/// # Ok::<(), sorted_list::list::KindError>(())
/// ```
pub struct FromFn<F>(pub F);

impl<F> Comparator for FromFn<F>
where
    F: Fn(&Value, &Value) -> Result<Ordering, UnsupportedKind>,
{
    fn compare(&self, a: &Value, b: &Value) -> Result<Ordering, UnsupportedKind> {
        (self.0)(a, b)
    }
}
