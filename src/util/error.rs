use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

use crate::value::Kind;

/// The list already holds values of one [`Kind`] and was given a value of the other.
#[derive(Debug)]
pub struct KindMismatch {
    /// The kind established by the first value inserted since the list was last empty.
    pub expected: Kind,
    /// The kind of the rejected value.
    pub found: Kind,
}

impl Display for KindMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cannot use a value of kind '{}' with a list of '{}' values!",
            self.found, self.expected
        )
    }
}

impl Error for KindMismatch {}

/// A comparator policy was given a value outside the kind(s) it is defined over.
#[derive(Debug)]
pub struct UnsupportedKind {
    /// The name of the rejecting policy.
    pub policy: &'static str,
    /// The kind of the rejected value.
    pub found: Kind,
}

impl Display for UnsupportedKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} does not accept '{}' values!", self.policy, self.found)
    }
}

impl Error for UnsupportedKind {}

#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum KindError {
    Mismatch(KindMismatch),
    Unsupported(UnsupportedKind),
}
