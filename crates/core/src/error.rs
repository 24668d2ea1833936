//! Error types for groupstore
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Every variant is caller-fault and raised synchronously; the store never
//! retries or degrades internally.

use thiserror::Error;

/// Result type alias for groupstore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the grouped store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Update issued against a group that was never created
    #[error("group not found: {0}")]
    GroupNotFound(String),

    /// Composite-id component is empty or contains the separator token
    #[error("illegal composite id components (group = {group:?}, id = {id:?})")]
    InvalidIdComponent {
        /// Group component as supplied by the caller
        group: String,
        /// Id component as supplied by the caller
        id: String,
    },

    /// Composite id does not split into exactly two parts on the separator
    #[error("cannot extract group from composite id: {0:?}")]
    MalformedCompositeId(String),
}
