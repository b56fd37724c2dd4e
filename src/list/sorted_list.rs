use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use super::{Iter, Link, Node};
use crate::compare::{Comparator, Natural};
#[doc(inline)]
pub use crate::util::error::{KindError, KindMismatch};
use crate::value::Value;

/// A singly-linked list whose elements are kept sorted under a pluggable [`Comparator`], chosen
/// at construction and fixed for the list's lifetime.
///
/// All elements must share one [`Kind`](crate::value::Kind) (integral or textual). The first
/// value inserted into an empty list establishes the kind and every later operation is checked
/// against it; emptying the list resets the constraint.
///
/// Duplicates are permitted. Every scanning operation stops as soon as it sees a value strictly
/// greater than its argument, so a negative lookup costs the position the value would occupy, not
/// a full traversal.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SortedList.
/// - `p`: The position the queried value occupies (or would occupy) in sort order.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `is_empty` | `O(1)` |
/// | `front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `insert` | `O(p)` |
/// | `remove_one` | `O(p)` |
/// | `remove_all` | `O(p + duplicates)` |
/// | `contains` | `O(p)` |
/// | `to_vec` | `O(n)` |
/// | `clear` | `O(n)` |
pub struct SortedList<C = Natural> {
    pub(crate) head: Link,
    pub(crate) len: usize,
    pub(crate) comparator: C,
}

impl<C: Comparator + Default> SortedList<C> {
    /// Creates a new empty SortedList using the comparator's default value, which for the
    /// default type parameter means [`Natural`] ordering.
    pub fn new() -> SortedList<C> {
        SortedList {
            head: None,
            len: 0,
            comparator: C::default(),
        }
    }
}

impl<C> SortedList<C> {
    /// Creates a new empty SortedList ordered by the provided comparator.
    pub const fn with_comparator(comparator: C) -> SortedList<C> {
        SortedList {
            head: None,
            len: 0,
            comparator,
        }
    }

    /// Returns the number of elements in the SortedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the SortedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a reference to the first element in sort order, if it exists.
    pub fn front(&self) -> Option<&Value> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Removes and returns the first element in sort order, if it exists.
    pub fn pop_front(&mut self) -> Option<Value> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.value)
    }

    /// Removes every element, resetting the kind constraint. No-op on an empty list.
    pub fn clear(&mut self) {
        // Unlink node by node so that dropping a long chain can't recurse through Drop.
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.len = 0;
    }

    /// Copies the elements into a [`Vec`] in sorted order. The result is an independent
    /// snapshot, not a live view.
    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().cloned().collect()
    }

    /// Returns a borrowed iterator over the elements in sorted order.
    ///
    /// Each call produces a fresh, self-contained cursor, so simultaneous or restarted
    /// enumerations never interfere. Pair with [`Iterator::enumerate`] for positions.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

impl<C: Comparator> SortedList<C> {
    /// Inserts a value, keeping the list sorted.
    ///
    /// The new node goes in front of the first existing element that compares strictly greater,
    /// so a duplicate lands after the existing run of equal elements (or in front of the head
    /// when it compares equal there).
    ///
    /// Fails with [`KindMismatch`] if the list is non-empty and holds the other kind, or with
    /// [`UnsupportedKind`](crate::compare::UnsupportedKind) if the comparator rejects the value.
    /// Either way the list is left untouched.
    pub fn insert(&mut self, value: impl Into<Value>) -> Result<(), KindError> {
        let value = value.into();
        self.guard_kind(&value)?;

        let after_head = match &self.head {
            Some(head) => self.comparator.compare(&value, &head.value)?.is_gt(),
            None => false,
        };

        if after_head {
            // UNWRAP: after_head is only true when a head node exists.
            let mut link = &mut self.head.as_deref_mut().unwrap().next;
            loop {
                let advance = match link.as_deref() {
                    Some(node) => self.comparator.compare(&node.value, &value)?.is_le(),
                    None => false,
                };
                if !advance {
                    break;
                }
                // UNWRAP: advance is only true when this link holds a node.
                link = &mut link.as_mut().unwrap().next;
            }
            let next = link.take();
            *link = Some(Box::new(Node { value, next }));
        } else {
            let next = self.head.take();
            self.head = Some(Box::new(Node { value, next }));
        }

        self.len += 1;
        Ok(())
    }

    /// Removes the first (head-most) element comparing equal to `value`, returning whether one
    /// was found. The scan gives up at the first strictly-greater element.
    pub fn remove_one(&mut self, value: &Value) -> Result<bool, KindError> {
        self.guard_kind(value)?;

        let mut link = &mut self.head;
        loop {
            let cmp = match link.as_deref() {
                Some(node) => self.comparator.compare(&node.value, value)?,
                None => return Ok(false),
            };
            match cmp {
                Ordering::Equal => {
                    // UNWRAP: The comparison above just matched against this node.
                    let node = link.take().unwrap();
                    *link = node.next;
                    self.len -= 1;
                    return Ok(true);
                },
                Ordering::Greater => return Ok(false),
                Ordering::Less => {
                    // UNWRAP: The comparison above just matched against this node.
                    link = &mut link.as_mut().unwrap().next;
                },
            }
        }
    }

    /// Removes every element comparing equal to `value`, returning how many were removed. Zero
    /// if nothing matched or the list is empty.
    pub fn remove_all(&mut self, value: &Value) -> Result<usize, KindError> {
        self.guard_kind(value)?;

        let mut removed = 0;
        let mut link = &mut self.head;
        loop {
            let cmp = match link.as_deref() {
                Some(node) => self.comparator.compare(&node.value, value)?,
                None => break,
            };
            match cmp {
                Ordering::Equal => {
                    // UNWRAP: The comparison above just matched against this node.
                    let node = link.take().unwrap();
                    *link = node.next;
                    self.len -= 1;
                    removed += 1;
                },
                Ordering::Greater => break,
                Ordering::Less => {
                    // UNWRAP: The comparison above just matched against this node.
                    link = &mut link.as_mut().unwrap().next;
                },
            }
        }

        Ok(removed)
    }

    /// Returns whether any element compares equal to `value`. The scan gives up at the first
    /// strictly-greater element.
    pub fn contains(&self, value: &Value) -> Result<bool, KindError> {
        self.guard_kind(value)?;

        let mut current = self.head.as_deref();
        while let Some(node) = current {
            match self.comparator.compare(&node.value, value)? {
                Ordering::Equal => return Ok(true),
                Ordering::Greater => return Ok(false),
                Ordering::Less => current = node.next.as_deref(),
            }
        }

        Ok(false)
    }
}

impl<C> SortedList<C> {
    // The kind a non-empty list accepts is observed via the current head, so an emptied list
    // resets the constraint. Checked before the comparator ever sees the value.
    fn guard_kind(&self, value: &Value) -> Result<(), KindMismatch> {
        match self.head.as_deref() {
            Some(head) if head.value.kind() != value.kind() => Err(KindMismatch {
                expected: head.value.kind(),
                found: value.kind(),
            }),
            _ => Ok(()),
        }
    }
}

impl<C: Comparator + Default> Default for SortedList<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Drop for SortedList<C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<C> PartialEq for SortedList<C> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<C> Eq for SortedList<C> {}

impl<C> Debug for SortedList<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<C> Display for SortedList<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|value| value.to_string())
                .collect::<Vec<String>>()
                .join(") -> (")
        )
    }
}
