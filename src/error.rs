//! Error types reported by the list cursor.
//!
//! Only construction failures are returned to the caller. Every other variant
//! is delivered to a [`Diagnostics`](crate::diagnostics::Diagnostics) sink
//! while the operation that hit it degrades to a no-op.

use thiserror::Error;

/// Result type for list cursor operations.
pub type Result<T> = std::result::Result<T, CursorError>;

/// Errors raised by the list cursor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    /// The configured highlight class was empty.
    #[error("list cursor requires a non-empty highlight class")]
    MissingHighlightClass,

    /// The list adapter did not name a scroll container.
    #[error("list cursor requires a scroll container")]
    MissingScrollContainer,

    /// `go_to` was called without a key.
    #[error("list cursor cannot go to an unset key")]
    UnsetKey,

    /// No row could be produced for the key, even with forced rendering.
    #[error("list cursor cannot highlight key {key}")]
    RowNotFound {
        /// Display form of the key that failed to resolve.
        key: String,
    },
}

impl CursorError {
    /// Returns true for errors raised while building a cursor.
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            CursorError::MissingHighlightClass | CursorError::MissingScrollContainer
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_message_names_key() {
        let err = CursorError::RowNotFound {
            key: "u7".to_string(),
        };
        assert_eq!(err.to_string(), "list cursor cannot highlight key u7");
        assert!(!err.is_construction());
    }

    #[test]
    fn test_construction_variants() {
        assert!(CursorError::MissingHighlightClass.is_construction());
        assert!(CursorError::MissingScrollContainer.is_construction());
        assert!(!CursorError::UnsetKey.is_construction());
    }
}
