//! A singly-linked list that keeps its elements continuously sorted.
//!
//! The centrepiece of this crate is [`SortedList`](list::SortedList): every insertion walks the
//! chain and splices the new node in front of the first strictly-greater element, so the list is
//! in sorted order after every mutation, not just on demand. All ordering decisions are delegated
//! to a pluggable [`Comparator`](compare::Comparator) chosen at construction, with
//! [`Natural`](compare::Natural) ordering as the default.
//!
//! # Values
//! A list stores [`Value`](value::Value)s, a closed union of integers and strings. All elements of
//! one list must share a single [`Kind`](value::Kind): the first insertion into an empty list
//! establishes it, and every later operation is checked against it. Emptying the list (via removal
//! or [`clear`](list::SortedList::clear)) lifts the constraint again.
//!
//! # Error Handling
//! Operations that take a candidate value are fallible in two distinct ways: the list itself
//! rejects values of the wrong kind with [`KindMismatch`](list::KindMismatch), and a comparator
//! policy rejects values outside the kinds it is defined over with
//! [`UnsupportedKind`](compare::UnsupportedKind). Errors are strongly typed enums for static
//! dispatch, and every check runs before the structure is touched, so a failed call leaves the
//! list exactly as it was.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming.

#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod compare;
pub mod list;
pub mod value;

pub(crate) mod util;

#[doc(inline)]
pub use compare::{CaseInsensitiveText, Comparator, DescendingInt, FromFn, Natural};
#[doc(inline)]
pub use list::SortedList;
#[doc(inline)]
pub use value::{Kind, Value};
