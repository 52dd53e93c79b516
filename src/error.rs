use thiserror::Error;

/// The error type for heap operations.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeapError {
    /// [`peek`](crate::Heap::peek) or [`pop`](crate::Heap::pop) was called on
    /// a heap holding no elements.
    #[error("attempted to take the top of an empty heap")]
    EmptyContainer,
}

/// A `Result` whose error defaults to [`HeapError`].
pub type Result<T, E = HeapError> = core::result::Result<T, E>;
