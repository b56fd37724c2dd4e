use crate::value::Value;

pub(crate) type Link = Option<Box<Node>>;

/// A single link in the chain, exclusively owned by its predecessor (or by the list itself for
/// the head). Nodes hold no behaviour; the list enforces every structural invariant.
pub(crate) struct Node {
    pub value: Value,
    pub next: Link,
}
