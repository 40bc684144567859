use std::fmt;

/// Capability slug that always grants access to restricted content.
pub const ADMINISTRATOR: &str = "administrator";

/// Capability slug for the host's network-level administrator.
pub const SUPER_ADMIN: &str = "super-admin";

/// A role slug as the host platform knows it.
///
/// Roles double as capabilities: a viewer "holds" a role when the host's
/// capability check answers yes for the role's slug.
///
/// # Examples
///
/// ```
/// use content_gate::RoleId;
///
/// let role = RoleId::new("editor");
/// assert_eq!(role.as_str(), "editor");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoleId(String);

impl RoleId {
    /// Creates a role id from a slug.
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Returns the role slug.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RoleId {
    fn from(slug: &str) -> Self {
        Self::new(slug)
    }
}

/// The host's listing of assignable roles.
///
/// The editor's role selector is populated from this directory. The host
/// owns the actual role definitions; this crate only needs slugs and
/// display names, in the order the selector should show them.
pub trait RoleDirectory {
    /// Returns `(slug, display name)` pairs in selector order.
    fn roles(&self) -> Vec<(RoleId, String)>;
}

/// A fixed role directory for tests, demos, and hosts with static role sets.
///
/// # Examples
///
/// ```
/// use content_gate::{RoleDirectory, StaticRoles};
///
/// let roles = StaticRoles::defaults();
/// assert!(roles.roles().iter().any(|(slug, _)| slug.as_str() == "editor"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticRoles {
    entries: Vec<(RoleId, String)>,
}

impl StaticRoles {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a role, returning the directory for chaining.
    pub fn with_role(mut self, slug: impl Into<String>, name: impl Into<String>) -> Self {
        self.entries.push((RoleId::new(slug), name.into()));
        self
    }

    /// The conventional publishing-platform role set.
    pub fn defaults() -> Self {
        Self::new()
            .with_role("administrator", "Administrator")
            .with_role("editor", "Editor")
            .with_role("author", "Author")
            .with_role("contributor", "Contributor")
            .with_role("subscriber", "Subscriber")
    }
}

impl RoleDirectory for StaticRoles {
    fn roles(&self) -> Vec<(RoleId, String)> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_id_round_trips_slug() {
        let role = RoleId::new("editor");
        assert_eq!(role.as_str(), "editor");
        assert_eq!(role.to_string(), "editor");
        assert_eq!(RoleId::from("editor"), role);
    }

    #[test]
    fn static_roles_preserve_insertion_order() {
        let roles = StaticRoles::new()
            .with_role("editor", "Editor")
            .with_role("author", "Author");

        let listed = roles.roles();
        assert_eq!(listed[0].0.as_str(), "editor");
        assert_eq!(listed[1].0.as_str(), "author");
    }

    #[test]
    fn default_directory_includes_administrator() {
        let roles = StaticRoles::defaults();
        assert!(roles
            .roles()
            .iter()
            .any(|(slug, _)| slug.as_str() == ADMINISTRATOR));
    }
}
