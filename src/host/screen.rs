//! Request and screen descriptors crossing the host boundary.
//!
//! These types intentionally contain simple, owned data so no host
//! framework types leak into the plugin. Hosts build them from their own
//! request machinery before firing hooks.

use std::fmt;

use crate::item::ItemId;
use crate::viewer::Viewer;

/// The admin edit screen a field-render hook fires for.
///
/// `item` is `None` for a brand-new, never-saved item; the editor then
/// renders the "no restriction" defaults.
#[derive(Debug, Clone, Copy)]
pub struct EditScreen {
    /// The item being edited, if it exists yet
    pub item: Option<ItemId>,
}

/// The admin screen context for asset enqueueing.
#[derive(Debug, Clone)]
pub struct AdminScreen {
    /// The host's admin AJAX endpoint URL, passed through to the script
    pub ajax_endpoint: String,
}

/// The originally requested URL, used to send a visitor back after login.
///
/// # Examples
///
/// ```
/// use content_gate::host::RequestUrl;
///
/// let url = RequestUrl::new(true, "example.test", "/members/news");
/// assert_eq!(url.to_absolute(), "https://example.test/members/news");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl {
    /// Whether the request came in over TLS
    pub secure: bool,
    /// Host header value
    pub host: String,
    /// Path and query of the request
    pub path: String,
}

impl RequestUrl {
    /// Creates a request URL from its parts.
    pub fn new(secure: bool, host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            secure,
            host: host.into(),
            path: path.into(),
        }
    }

    /// Assembles the absolute URL.
    pub fn to_absolute(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        format!("{}://{}{}", scheme, self.host, self.path)
    }
}

/// One content render, as the filter hooks see it.
pub struct RenderRequest<'a> {
    /// The item being rendered
    pub item: ItemId,
    /// Whoever is asking
    pub viewer: &'a dyn Viewer,
    /// The originally requested URL
    pub url: RequestUrl,
}

impl fmt::Debug for RenderRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderRequest")
            .field("item", &self.item)
            .field("logged_in", &self.viewer.is_logged_in())
            .field("url", &self.url)
            .finish()
    }
}

/// The direct-output channel of the rendering pipeline.
///
/// Filters may write HTML here as a side effect, independent of their
/// return value. The host decides where emitted output lands relative to
/// the returned content; a plain `String` implementation collects it for
/// inspection.
pub trait Emit {
    /// Appends HTML to the channel.
    fn emit(&mut self, html: &str);
}

impl Emit for String {
    fn emit(&mut self, html: &str) {
        self.push_str(html);
    }
}
