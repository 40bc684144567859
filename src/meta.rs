use std::cell::RefCell;
use std::collections::HashMap;

use crate::item::ItemId;
use crate::roles::RoleId;
use crate::Verified;

/// Metadata key holding the restriction flag (`"0"`/`"1"`).
pub const RESTRICT_ACCESS_KEY: &str = "content-gate_restrict_access";

/// Metadata key holding the required role slug.
pub const SELECTED_ROLE_KEY: &str = "content-gate_selected_role";

/// The host platform's per-item key-value metadata facility.
///
/// Writes are idempotent upserts; concurrency control (last-write-wins on
/// save) is the host's concern. Implementations take `&self` because the
/// host hands the store out to every hook callback.
pub trait MetaStore {
    /// Reads a metadata value, `None` when the key was never written.
    fn get(&self, item: ItemId, key: &str) -> Option<String>;

    /// Upserts a metadata value.
    fn update(&self, item: ItemId, key: &str, value: &str);
}

/// In-memory metadata store for tests and demos.
///
/// # Examples
///
/// ```
/// use content_gate::{ItemId, MemoryMetaStore, MetaStore};
///
/// let store = MemoryMetaStore::new();
/// store.update(ItemId(7), "content-gate_restrict_access", "1");
///
/// assert_eq!(
///     store.get(ItemId(7), "content-gate_restrict_access").as_deref(),
///     Some("1")
/// );
/// assert_eq!(store.get(ItemId(8), "content-gate_restrict_access"), None);
/// ```
#[derive(Debug, Default)]
pub struct MemoryMetaStore {
    entries: RefCell<HashMap<(ItemId, String), String>>,
}

impl MemoryMetaStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored values across all items.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the store holds no values.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl MetaStore for MemoryMetaStore {
    fn get(&self, item: ItemId, key: &str) -> Option<String> {
        self.entries.borrow().get(&(item, key.to_string())).cloned()
    }

    fn update(&self, item: ItemId, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert((item, key.to_string()), value.to_string());
    }
}

/// The typed read view over an item's two restriction fields.
///
/// Encodes the read-side rules in one place: the flag is truthy unless
/// absent, empty, or `"0"`; the role is present unless absent or empty.
/// The role may be stored while the flag is off; it is simply not enforced
/// then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restriction {
    enabled: bool,
    role: Option<RoleId>,
}

impl Restriction {
    /// An unrestricted item (also the default for never-saved items).
    pub fn none() -> Self {
        Self {
            enabled: false,
            role: None,
        }
    }

    /// A restriction requiring the given role. Mostly useful in tests.
    pub fn required(role: impl Into<RoleId>) -> Self {
        Self {
            enabled: true,
            role: Some(role.into()),
        }
    }

    /// Loads the restriction state for an item from the store.
    pub fn load(store: &dyn MetaStore, item: ItemId) -> Self {
        let enabled = store
            .get(item, RESTRICT_ACCESS_KEY)
            .map(|value| is_truthy(&value))
            .unwrap_or(false);
        let role = store
            .get(item, SELECTED_ROLE_KEY)
            .filter(|slug| !slug.is_empty())
            .map(RoleId::new);

        Self { enabled, role }
    }

    /// Whether the restriction flag is set.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The stored role, enforced or not.
    pub fn role(&self) -> Option<&RoleId> {
        self.role.as_ref()
    }

    /// The role to enforce, `None` when the flag is off or no role is set.
    pub fn enforced_role(&self) -> Option<&RoleId> {
        if self.enabled {
            self.role.as_ref()
        } else {
            None
        }
    }
}

/// Persists both restriction fields for an item.
///
/// Accepts only sanitized values; this is the single write path between a
/// submission and the store. Two independent upserts, matching the host's
/// metadata API.
pub fn write_restriction(
    store: &dyn MetaStore,
    item: ItemId,
    flag: &Verified<String>,
    role: &Verified<String>,
) {
    store.update(item, RESTRICT_ACCESS_KEY, flag.as_ref());
    store.update(item, SELECTED_ROLE_KEY, role.as_ref());
}

fn is_truthy(value: &str) -> bool {
    !value.is_empty() && value != "0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_saved_item_is_unrestricted() {
        let store = MemoryMetaStore::new();
        let restriction = Restriction::load(&store, ItemId(1));

        assert_eq!(restriction, Restriction::none());
        assert!(restriction.enforced_role().is_none());
    }

    #[test]
    fn zero_flag_is_falsy() {
        let store = MemoryMetaStore::new();
        store.update(ItemId(1), RESTRICT_ACCESS_KEY, "0");
        store.update(ItemId(1), SELECTED_ROLE_KEY, "editor");

        let restriction = Restriction::load(&store, ItemId(1));
        assert!(!restriction.is_enabled());
        // Role is stored but not enforced
        assert_eq!(restriction.role().unwrap().as_str(), "editor");
        assert!(restriction.enforced_role().is_none());
    }

    #[test]
    fn empty_flag_is_falsy() {
        let store = MemoryMetaStore::new();
        store.update(ItemId(1), RESTRICT_ACCESS_KEY, "");

        assert!(!Restriction::load(&store, ItemId(1)).is_enabled());
    }

    #[test]
    fn nonzero_flag_is_truthy() {
        let store = MemoryMetaStore::new();
        store.update(ItemId(1), RESTRICT_ACCESS_KEY, "1");
        store.update(ItemId(1), SELECTED_ROLE_KEY, "editor");

        let restriction = Restriction::load(&store, ItemId(1));
        assert!(restriction.is_enabled());
        assert_eq!(restriction.enforced_role().unwrap().as_str(), "editor");
    }

    #[test]
    fn enabled_flag_with_empty_role_is_not_enforced() {
        let store = MemoryMetaStore::new();
        store.update(ItemId(1), RESTRICT_ACCESS_KEY, "1");
        store.update(ItemId(1), SELECTED_ROLE_KEY, "");

        let restriction = Restriction::load(&store, ItemId(1));
        assert!(restriction.is_enabled());
        assert!(restriction.enforced_role().is_none());
    }

    #[test]
    fn write_restriction_updates_both_keys() {
        let store = MemoryMetaStore::new();
        write_restriction(
            &store,
            ItemId(3),
            &Verified::new_unchecked("1".to_string()),
            &Verified::new_unchecked("author".to_string()),
        );

        assert_eq!(store.get(ItemId(3), RESTRICT_ACCESS_KEY).as_deref(), Some("1"));
        assert_eq!(store.get(ItemId(3), SELECTED_ROLE_KEY).as_deref(), Some("author"));
    }

    #[test]
    fn updates_are_idempotent_upserts() {
        let store = MemoryMetaStore::new();
        store.update(ItemId(2), RESTRICT_ACCESS_KEY, "1");
        store.update(ItemId(2), RESTRICT_ACCESS_KEY, "1");
        store.update(ItemId(2), RESTRICT_ACCESS_KEY, "0");

        assert_eq!(store.get(ItemId(2), RESTRICT_ACCESS_KEY).as_deref(), Some("0"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn items_are_isolated() {
        let store = MemoryMetaStore::new();
        store.update(ItemId(1), RESTRICT_ACCESS_KEY, "1");

        assert_eq!(store.get(ItemId(2), RESTRICT_ACCESS_KEY), None);
    }
}
