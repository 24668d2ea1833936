//! GroupedStore: two-level keyed storage primitive
//!
//! This crate implements the registry component: a process-local mapping
//! from (group, item id) to an opaque payload `T`, with lock-free reads and
//! a coarse store-wide lock for mutations.
//!
//! Internal layout follows the outer-map/inner-map split: a `DashMap` of
//! groups, each holding its own `DashMap` of members.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod grouped;

pub use grouped::GroupedStore;
