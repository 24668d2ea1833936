//! Core types for groupstore
//!
//! This crate defines the foundational pieces used throughout the system:
//! - Error: error type hierarchy and `Result` alias
//! - IdScheme: composite-id encoding (`<group><separator><id>`)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod id;

// Re-export commonly used types at the crate root
pub use error::{Error, Result};
pub use id::{IdScheme, SEPARATOR};
