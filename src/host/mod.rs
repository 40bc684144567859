//! Host platform boundary.
//!
//! Everything the host provides and everything it calls back into lives
//! here: the hook dispatch table, the screen and render-request
//! descriptors, the direct-output channel, and the login-form renderer
//! seam.
//!
//! # Design Principles
//!
//! 1. **No host-framework dependencies**: the types carry simple, owned
//!    data; hosts map their own request machinery onto them.
//!
//! 2. **No business logic**: the boundary routes calls and data. Deciding
//!    access, sanitizing input, and touching the store happen behind the
//!    hooks, not in them.
//!
//! 3. **Explicit wiring**: a plugin instance registers plain closures on
//!    [`Hooks`] once at process start. There is no global state beyond the
//!    host's own dispatch table.
//!
//! # Integration Model
//!
//! ```text
//! host startup      → Hooks::load_catalogs / enqueue_admin_assets / fire_init
//! edit screen load  → Hooks::render_edit_fields
//! content save      → Hooks::fire_save
//! page render       → Hooks::apply_content_filters / apply_title_filters
//! ```

mod hooks;
mod login;
mod screen;

pub use hooks::Hooks;
pub use login::{BasicLoginForm, LoginForm, LoginFormArgs};
pub use screen::{AdminScreen, EditScreen, Emit, RenderRequest, RequestUrl};
