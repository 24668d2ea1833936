//! groupstore - process-local two-level keyed registry
//!
//! groupstore is a small in-memory registry: entries are organized into
//! named groups and addressed within a group by an item identifier. It is
//! intended as a reusable base for tracking scheduled entities by group and
//! instance id.
//!
//! # Quick Start
//!
//! ```
//! use groupstore::GroupedStore;
//!
//! let store: GroupedStore<String> = GroupedStore::new("jobs.Trigger");
//!
//! // Insert and read back
//! store.create("nightly", "t-1", "0 0 * * *".to_string());
//! assert_eq!(store.read("nightly", "t-1").as_deref(), Some("0 0 * * *"));
//!
//! // Composite ids are the one externally observable encoding
//! let composite = store.composite_id("nightly", "t-1")?;
//! assert_eq!(store.group_from_composite(&composite)?, "nightly");
//! # Ok::<(), groupstore::Error>(())
//! ```
//!
//! # Architecture
//!
//! The store is a self-contained data structure with a concurrency
//! contract: reads and listings are lock-free over the sharded two-level
//! map, while mutations against existing groups serialize on a single
//! store-wide lock. See [`GroupedStore`] for the full operation set.

// Re-export the public API from the member crates
pub use groupstore_core::{Error, IdScheme, Result, SEPARATOR};
pub use groupstore_store::GroupedStore;
