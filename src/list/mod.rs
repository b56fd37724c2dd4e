//! A module containing [`SortedList`] and associated types.
//!
//! [`Iter`] provides borrowed iteration and [`IntoIter`] owned iteration, both yielding elements
//! in sorted order. There is no mutable iterator because mutating elements in place could break
//! the sort order, which would be a logic error.
//!
//! [`SortedList`] is also re-exported at the crate root.

mod iter;
mod node;
mod sorted_list;

pub use iter::*;
pub(crate) use node::*;
pub use sorted_list::*;
