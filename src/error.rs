/// Errors returned by operations that must produce an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// No item equivalent to the query is stored in the tree.
    #[error("no equivalent item found in the tree")]
    NotFound,

    /// The traversal has already yielded every item.
    #[error("traversal has no remaining items")]
    EnumerationExhausted,
}
