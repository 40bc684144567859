use std::fmt;

/// Identifier of a content item (page or post) in the host's content tree.
///
/// The host platform assigns these; the crate only carries them around as
/// lookup keys for the per-item metadata store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
