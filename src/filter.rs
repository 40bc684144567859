use crate::meta::Restriction;
use crate::roles::{ADMINISTRATOR, SUPER_ADMIN};
use crate::viewer::Viewer;

/// Msgid of the notice shown to logged-in viewers without the required role.
pub(crate) const NOTICE_MSGID: &str = "You are logged but not part of the group that has \
access to this content, sorry. You can access other site content, access the menu and \
continue browsing.";

/// Msgid of the heading substituted for a restricted item's title.
pub(crate) const RESTRICTED_TITLE_MSGID: &str = "Restrict Content";

/// Outcome of evaluating a viewer against an item's restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Render the original content and title unchanged.
    Allow,
    /// Logged in but unauthorized: substitute the denial notice.
    DenyNotice,
    /// Anonymous: substitute a login form pointing back to the page.
    RequireLogin,
}

/// Decides whether a viewer may see a restricted item.
///
/// The shared decision behind both the content and the title filter:
///
/// 1. No enforced restriction (flag falsy or role empty) → [`Allow`].
/// 2. Viewer holds the required role, `administrator`, or `super-admin` →
///    [`Allow`].
/// 3. Otherwise, logged in → [`DenyNotice`]; anonymous → [`RequireLogin`].
///
/// [`Allow`]: AccessDecision::Allow
/// [`DenyNotice`]: AccessDecision::DenyNotice
/// [`RequireLogin`]: AccessDecision::RequireLogin
///
/// # Examples
///
/// ```
/// use content_gate::{evaluate_access, AccessDecision, AnonymousViewer, Restriction};
///
/// let restriction = Restriction::required("editor");
/// assert_eq!(
///     evaluate_access(&restriction, &AnonymousViewer),
///     AccessDecision::RequireLogin
/// );
///
/// assert_eq!(
///     evaluate_access(&Restriction::none(), &AnonymousViewer),
///     AccessDecision::Allow
/// );
/// ```
pub fn evaluate_access(restriction: &Restriction, viewer: &dyn Viewer) -> AccessDecision {
    let role = match restriction.enforced_role() {
        Some(role) => role,
        None => return AccessDecision::Allow,
    };

    if viewer.can(role.as_str()) || viewer.can(ADMINISTRATOR) || viewer.can(SUPER_ADMIN) {
        return AccessDecision::Allow;
    }

    if viewer.is_logged_in() {
        AccessDecision::DenyNotice
    } else {
        AccessDecision::RequireLogin
    }
}
