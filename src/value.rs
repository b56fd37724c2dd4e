//! A module containing [`Value`], the element type stored by
//! [`SortedList`](crate::list::SortedList), and its [`Kind`] tag.

use derive_more::{Display, From, IsVariant, TryInto};

/// The coarse category of a [`Value`]: integral or textual.
///
/// A [`SortedList`](crate::list::SortedList) requires all of its elements to share one Kind, and
/// the names displayed here (`int` / `string`) are the ones used in error messages.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    #[display("int")]
    Int,
    #[display("string")]
    Text,
}

/// A single element: either an integer or a string.
///
/// Modelling the two kinds as a closed sum type means the list's kind-consistency guard is a plain
/// tag comparison, with no dynamic type introspection anywhere.
///
/// The derived [`Ord`] orders integers numerically, strings lexicographically by code point, and
/// any integer before any string. [`Natural`](crate::compare::Natural) ordering is exactly this.
#[derive(Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, From, TryInto, IsVariant)]
pub enum Value {
    Int(i64),
    Text(String),
}

impl Value {
    /// Returns the [`Kind`] tag of this value.
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Int,
            Value::Text(_) => Kind::Text,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Value {
        Value::Text(String::from(value))
    }
}
