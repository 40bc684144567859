//! Admin-screen assets and the host's enqueue surface.

/// Handle under which both admin assets are enqueued.
pub const ADMIN_ASSET_HANDLE: &str = "content-gate-admin";

/// The checkbox-to-role-box toggle script, embedded at build time.
pub const ADMIN_SCRIPT: &str = include_str!("../assets/js/admin.js");

/// The admin stylesheet (hidden role box plus its transition).
pub const ADMIN_STYLE: &str = include_str!("../assets/css/admin.css");

/// A stylesheet queued for the admin screen.
#[derive(Debug, Clone)]
pub struct Style {
    /// Host-facing handle
    pub handle: String,
    /// Inline stylesheet source
    pub source: &'static str,
}

/// A script queued for the admin screen.
#[derive(Debug, Clone)]
pub struct Script {
    /// Host-facing handle
    pub handle: String,
    /// Inline script source
    pub source: &'static str,
    /// Localized key/value data made available to the script
    pub data: Vec<(String, String)>,
}

/// The host's asset queue for one admin-screen render.
///
/// Collects what plugins enqueue so the host (or a test) can inspect and
/// emit it.
///
/// # Examples
///
/// ```
/// use content_gate::{AssetQueue, ADMIN_SCRIPT};
///
/// let mut queue = AssetQueue::new();
/// queue.enqueue_script(
///     "content-gate-admin",
///     ADMIN_SCRIPT,
///     vec![("ajax_url".to_string(), "/admin/ajax".to_string())],
/// );
///
/// assert_eq!(queue.scripts().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct AssetQueue {
    styles: Vec<Style>,
    scripts: Vec<Script>,
}

impl AssetQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a stylesheet.
    pub fn enqueue_style(&mut self, handle: impl Into<String>, source: &'static str) {
        self.styles.push(Style {
            handle: handle.into(),
            source,
        });
    }

    /// Queues a script with localized data.
    pub fn enqueue_script(
        &mut self,
        handle: impl Into<String>,
        source: &'static str,
        data: Vec<(String, String)>,
    ) {
        self.scripts.push(Script {
            handle: handle.into(),
            source,
            data,
        });
    }

    /// Queued stylesheets, in enqueue order.
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// Queued scripts, in enqueue order.
    pub fn scripts(&self) -> &[Script] {
        &self.scripts
    }
}
