use thiserror::Error;

/// Errors reported by the code-construction core.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HuffmanError {
    /// `remove_min` or a peek was called on a queue with no entries.
    #[error("priority queue is empty")]
    EmptyQueue,
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
