//! Role-based content access gating for host publishing platforms.
//!
//! An editor marks a page or post as restricted and picks the single role
//! required to view it; this crate's filters then substitute the rendered
//! content with a login form (anonymous viewer) or a denial notice
//! (logged-in but unauthorized viewer). Everything durable or identity
//! related is delegated to the host:
//!
//! - **Metadata**: two per-item keys behind the [`MetaStore`] seam
//! - **Viewer identity and capabilities**: the [`Viewer`] trait
//! - **Anti-forgery tokens**: the [`TokenService`] trait
//! - **Login rendering**: the [`host::LoginForm`] trait
//!
//! Submitted field values travel as [`Tainted<String>`](Tainted) and must
//! pass a [`Sanitizer`] before they reach the store.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use content_gate::host::{BasicLoginForm, Hooks, RenderRequest, RequestUrl};
//! use content_gate::{
//!     AnonymousViewer, ContentGate, ItemId, MemoryMetaStore, MetaStore, SessionTokens,
//!     StaticRoles, RESTRICT_ACCESS_KEY, SELECTED_ROLE_KEY,
//! };
//!
//! // One-time setup at process start
//! let store = Rc::new(MemoryMetaStore::new());
//! let mut hooks = Hooks::new();
//! ContentGate::new(
//!     store.clone(),
//!     Rc::new(SessionTokens::new()),
//!     Rc::new(StaticRoles::defaults()),
//!     Rc::new(BasicLoginForm),
//! )
//! .install(&mut hooks);
//!
//! // An editor restricted item 7 to editors
//! store.update(ItemId(7), RESTRICT_ACCESS_KEY, "1");
//! store.update(ItemId(7), SELECTED_ROLE_KEY, "editor");
//!
//! // An anonymous visitor renders the page
//! let viewer = AnonymousViewer;
//! let request = RenderRequest {
//!     item: ItemId(7),
//!     viewer: &viewer,
//!     url: RequestUrl::new(false, "example.test", "/page"),
//! };
//! let mut emitted = String::new();
//! let shown = hooks.apply_content_filters(&request, "<p>secret</p>".to_string(), &mut emitted);
//!
//! assert!(shown.is_empty());           // original content withheld
//! assert!(emitted.contains("loginform")); // login form emitted instead
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assets;
mod editor;
mod filter;
pub mod host;
mod html;
mod i18n;
mod item;
mod meta;
mod plugin;
mod roles;
mod sanitizer;
mod save;
mod tainted;
mod token;
mod verified;
mod viewer;

pub use assets::{AssetQueue, Script, Style, ADMIN_ASSET_HANDLE, ADMIN_SCRIPT, ADMIN_STYLE};
pub use filter::{evaluate_access, AccessDecision};
pub use html::{escape_attr, escape_text};
pub use i18n::{Catalog, TranslationRegistry, TEXT_DOMAIN};
pub use item::ItemId;
pub use meta::{
    MemoryMetaStore, MetaStore, Restriction, RESTRICT_ACCESS_KEY, SELECTED_ROLE_KEY,
};
pub use plugin::ContentGate;
pub use roles::{RoleDirectory, RoleId, StaticRoles, ADMINISTRATOR, SUPER_ADMIN};
pub use sanitizer::{AttributeSanitizer, SanitizationError, SanitizationErrorKind, Sanitizer};
pub use save::{SaveContext, SaveOutcome, Submission, TOKEN_ACTION, TOKEN_FIELD};
pub use tainted::Tainted;
pub use token::{SessionTokens, SubmissionToken, TokenService};
pub use verified::Verified;
pub use viewer::{AnonymousViewer, Principal, SessionViewer, Viewer};
