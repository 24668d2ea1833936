//! Two-level grouped storage
//!
//! Maps (group, item id) to an opaque payload `T`. Groups are created
//! implicitly on first insert and never removed; member maps may become
//! empty but persist for the store's lifetime.
//!
//! # Design
//!
//! - Outer map: `DashMap<String, DashMap<String, T>>` - sharded, lock-free
//!   reads over both levels
//! - Mutation lock: a single `parking_lot::Mutex<()>` serializing `update`,
//!   `delete`, and `create`'s fallback into an existing group
//! - `create` into a brand-new group takes an optimistic path: a
//!   conditional insert of a fresh member map via the DashMap entry API,
//!   without touching the store-wide lock
//!
//! # Thread Safety
//!
//! `read` and `list*` take no store-wide lock; they rely on DashMap's
//! internal shard locking. A concurrent `list` may therefore observe a view
//! that is stale or partially updated relative to an in-flight mutation -
//! there is no atomicity across keys. The mutation lock is held briefly per
//! call and never across iteration.
//!
//! Lock ordering: the mutation lock is always acquired before any DashMap
//! shard guard. No path holds a shard guard while acquiring the mutation
//! lock.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use groupstore_core::error::{Error, Result};
use groupstore_core::id::IdScheme;
use parking_lot::Mutex;
use tracing::{debug, trace};

/// Process-local two-level keyed store
///
/// Entries are organized into named groups and addressed within a group by
/// an item identifier. The payload type `T` is opaque to the store; `Clone`
/// is required only on operations that hand out owned copies.
///
/// # Example
///
/// ```
/// use groupstore_store::GroupedStore;
///
/// let store: GroupedStore<String> = GroupedStore::new("jobs.Trigger");
///
/// store.create("nightly", "t-1", "0 0 * * *".to_string());
/// assert_eq!(store.read("nightly", "t-1").as_deref(), Some("0 0 * * *"));
///
/// store.delete("nightly", "t-1");
/// assert!(store.read("nightly", "t-1").is_none());
/// ```
pub struct GroupedStore<T> {
    /// group -> (item id -> item)
    groups: DashMap<String, DashMap<String, T>>,
    /// Store-wide critical section for mutations against existing groups
    mutations: Mutex<()>,
    /// Composite-id scheme fixed at construction
    scheme: IdScheme,
}

impl<T> GroupedStore<T> {
    /// Create an empty store whose composite-id separator embeds `type_tag`
    pub fn new(type_tag: impl AsRef<str>) -> Self {
        Self::with_scheme(IdScheme::new(type_tag))
    }

    /// Create an empty store with an explicit id scheme
    pub fn with_scheme(scheme: IdScheme) -> Self {
        Self {
            groups: DashMap::new(),
            mutations: Mutex::new(()),
            scheme,
        }
    }

    /// The composite-id scheme used by this store
    pub fn scheme(&self) -> &IdScheme {
        &self.scheme
    }

    // ========================================================================
    // Create/Update/Read/Delete
    // ========================================================================

    /// Insert `item` under (group, id), overwriting any existing item
    ///
    /// A brand-new group is installed atomically: the first creator wins
    /// the race to install the member map, and losers fall back to
    /// inserting into the now-shared map under the mutation lock. Inserting
    /// an existing id overwrites silently; this never errors.
    pub fn create(&self, group: &str, id: &str, item: T) {
        // Optimistic path: conditional insert of a fresh member map. The
        // entry guard is a DashMap shard lock, not the store-wide one.
        let item = match self.groups.entry(group.to_owned()) {
            Entry::Vacant(slot) => {
                let members = DashMap::new();
                members.insert(id.to_owned(), item);
                slot.insert(members);
                debug!(group, "installed member map for new group");
                return;
            }
            Entry::Occupied(_) => item,
        };

        // The group already existed, or another thread won the install
        // race. The entry guard above is dropped before the lock is taken.
        let _guard = self.mutations.lock();
        self.groups
            .entry(group.to_owned())
            .or_default()
            .insert(id.to_owned(), item);
        trace!(group, id, "inserted item into existing group");
    }

    /// Replace the item at (group, id) in an existing group
    ///
    /// Acts as an upsert within the group: there is no existence check on
    /// `id`. The group itself must already exist; updating a never-created
    /// group returns [`Error::GroupNotFound`].
    pub fn update(&self, group: &str, id: &str, item: T) -> Result<()> {
        let _guard = self.mutations.lock();
        let members = self
            .groups
            .get(group)
            .ok_or_else(|| Error::GroupNotFound(group.to_owned()))?;
        members.insert(id.to_owned(), item);
        trace!(group, id, "updated item");
        Ok(())
    }

    /// Get the item at (group, id)
    ///
    /// Lock-free. Returns `None` for an unknown group or an unknown id;
    /// never errors.
    pub fn read(&self, group: &str, id: &str) -> Option<T>
    where
        T: Clone,
    {
        self.groups
            .get(group)
            .and_then(|members| members.get(id).map(|item| item.value().clone()))
    }

    /// Remove the item at (group, id) if present
    ///
    /// Returns `true` if an item was removed. Removing an absent id, or
    /// deleting from an unknown group, is a no-op returning `false`.
    pub fn delete(&self, group: &str, id: &str) -> bool {
        let _guard = self.mutations.lock();
        let removed = self
            .groups
            .get(group)
            .and_then(|members| members.remove(id))
            .is_some();
        if removed {
            trace!(group, id, "deleted item");
        }
        removed
    }

    // ========================================================================
    // List Operations
    // ========================================================================

    /// All items belonging to `group`, in no guaranteed order
    ///
    /// Returns an empty vector for an unknown group. Lock-free; a
    /// concurrent mutation may or may not be visible in the result.
    pub fn list(&self, group: &str) -> Vec<T>
    where
        T: Clone,
    {
        self.groups
            .get(group)
            .map(|members| members.iter().map(|entry| entry.value().clone()).collect())
            .unwrap_or_default()
    }

    /// At most `count` items belonging to `group`
    ///
    /// No guarantee on which items survive truncation; callers must not
    /// rely on which subset appears.
    pub fn list_capped(&self, group: &str, count: usize) -> Vec<T>
    where
        T: Clone,
    {
        self.groups
            .get(group)
            .map(|members| {
                members
                    .iter()
                    .take(count)
                    .map(|entry| entry.value().clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All items across all groups, in no guaranteed order
    pub fn list_all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.groups
            .iter()
            .flat_map(|group| {
                group
                    .value()
                    .iter()
                    .map(|entry| entry.value().clone())
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Check whether a group has been created
    pub fn has_group(&self, group: &str) -> bool {
        self.groups.contains_key(group)
    }

    /// Number of groups ever created (empty member maps persist)
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of items across all groups
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|group| group.value().len()).sum()
    }

    /// True if no items are stored (groups themselves may still exist)
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    // ========================================================================
    // Composite Ids
    // ========================================================================

    /// True iff `candidate` contains this store's separator token
    pub fn is_composite_id(&self, candidate: &str) -> bool {
        self.scheme.is_composite(candidate)
    }

    /// Build the composite id string for (group, id)
    ///
    /// Fails with [`Error::InvalidIdComponent`] when either component is
    /// empty or contains the separator token.
    pub fn composite_id(&self, group: &str, id: &str) -> Result<String> {
        self.scheme.composite_id(group, id)
    }

    /// Extract the group portion of a composite id
    ///
    /// Returns the input unchanged when it contains no separator; fails
    /// with [`Error::MalformedCompositeId`] on an ambiguous split.
    pub fn group_from_composite<'a>(&self, composite: &'a str) -> Result<&'a str> {
        self.scheme.group_from_id(composite)
    }
}

impl<T> std::fmt::Debug for GroupedStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupedStore")
            .field("group_count", &self.group_count())
            .field("item_count", &self.item_count())
            .field("separator", &self.scheme.separator())
            .finish()
    }
}
