//! The host's hook dispatch table.
//!
//! Plugins register plain closures against named lifecycle and filter
//! points; the host fires them at the matching moments of its request
//! cycle. Actions run for their side effects; filters fold a value through
//! every registered callback in registration order.
//!
//! No business logic lives here. The table neither reads metadata nor
//! checks capabilities; it only routes calls.

use std::fmt;

use crate::assets::AssetQueue;
use crate::host::screen::{AdminScreen, EditScreen, Emit, RenderRequest};
use crate::i18n::TranslationRegistry;
use crate::save::{SaveContext, Submission};

type CatalogLoadHook = Box<dyn Fn(&mut TranslationRegistry)>;
type AdminAssetsHook = Box<dyn Fn(&AdminScreen, &mut AssetQueue)>;
type InitHook = Box<dyn Fn()>;
type EditFieldsHook = Box<dyn Fn(&EditScreen, &mut dyn Emit)>;
type SaveHook = Box<dyn Fn(&SaveContext, &Submission)>;
type ContentFilterHook = Box<dyn Fn(&RenderRequest<'_>, String, &mut dyn Emit) -> String>;
type TitleFilterHook = Box<dyn Fn(&RenderRequest<'_>, String) -> String>;

/// Hook dispatch table covering the host's lifecycle and filter points.
///
/// # Examples
///
/// ```
/// use content_gate::host::Hooks;
///
/// let mut hooks = Hooks::new();
/// hooks.on_init(|| {});
/// assert_eq!(hooks.registered(), 1);
///
/// hooks.fire_init();
/// ```
#[derive(Default)]
pub struct Hooks {
    catalog_load: Vec<CatalogLoadHook>,
    admin_assets: Vec<AdminAssetsHook>,
    init: Vec<InitHook>,
    edit_fields: Vec<EditFieldsHook>,
    save: Vec<SaveHook>,
    content_filters: Vec<ContentFilterHook>,
    title_filters: Vec<TitleFilterHook>,
}

impl Hooks {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback for translation-catalog loading.
    pub fn on_catalog_load(&mut self, hook: impl Fn(&mut TranslationRegistry) + 'static) {
        self.catalog_load.push(Box::new(hook));
    }

    /// Registers a callback for admin asset enqueueing.
    pub fn on_admin_assets(&mut self, hook: impl Fn(&AdminScreen, &mut AssetQueue) + 'static) {
        self.admin_assets.push(Box::new(hook));
    }

    /// Registers an initialization callback.
    pub fn on_init(&mut self, hook: impl Fn() + 'static) {
        self.init.push(Box::new(hook));
    }

    /// Registers a callback for the edit screen's field area.
    pub fn on_edit_fields(&mut self, hook: impl Fn(&EditScreen, &mut dyn Emit) + 'static) {
        self.edit_fields.push(Box::new(hook));
    }

    /// Registers a save-event callback.
    pub fn on_save(&mut self, hook: impl Fn(&SaveContext, &Submission) + 'static) {
        self.save.push(Box::new(hook));
    }

    /// Registers a content-render filter.
    pub fn on_content_filter(
        &mut self,
        hook: impl Fn(&RenderRequest<'_>, String, &mut dyn Emit) -> String + 'static,
    ) {
        self.content_filters.push(Box::new(hook));
    }

    /// Registers a title-render filter.
    pub fn on_title_filter(
        &mut self,
        hook: impl Fn(&RenderRequest<'_>, String) -> String + 'static,
    ) {
        self.title_filters.push(Box::new(hook));
    }

    /// Total number of registered callbacks across all points.
    pub fn registered(&self) -> usize {
        self.catalog_load.len()
            + self.admin_assets.len()
            + self.init.len()
            + self.edit_fields.len()
            + self.save.len()
            + self.content_filters.len()
            + self.title_filters.len()
    }

    /// Fires the catalog-load hooks.
    pub fn load_catalogs(&self, registry: &mut TranslationRegistry) {
        for hook in &self.catalog_load {
            hook(registry);
        }
    }

    /// Fires the admin-asset hooks.
    pub fn enqueue_admin_assets(&self, screen: &AdminScreen, queue: &mut AssetQueue) {
        for hook in &self.admin_assets {
            hook(screen, queue);
        }
    }

    /// Fires the initialization hooks.
    pub fn fire_init(&self) {
        for hook in &self.init {
            hook();
        }
    }

    /// Fires the edit-screen field-area hooks.
    pub fn render_edit_fields(&self, screen: &EditScreen, out: &mut dyn Emit) {
        for hook in &self.edit_fields {
            hook(screen, out);
        }
    }

    /// Fires the save-event hooks.
    pub fn fire_save(&self, ctx: &SaveContext, submission: &Submission) {
        for hook in &self.save {
            hook(ctx, submission);
        }
    }

    /// Folds content through every registered content filter.
    pub fn apply_content_filters(
        &self,
        request: &RenderRequest<'_>,
        content: String,
        out: &mut dyn Emit,
    ) -> String {
        let mut value = content;
        for hook in &self.content_filters {
            value = hook(request, value, out);
        }
        value
    }

    /// Folds a title through every registered title filter.
    pub fn apply_title_filters(&self, request: &RenderRequest<'_>, title: String) -> String {
        let mut value = title;
        for hook in &self.title_filters {
            value = hook(request, value);
        }
        value
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("catalog_load", &self.catalog_load.len())
            .field("admin_assets", &self.admin_assets.len())
            .field("init", &self.init.len())
            .field("edit_fields", &self.edit_fields.len())
            .field("save", &self.save.len())
            .field("content_filters", &self.content_filters.len())
            .field("title_filters", &self.title_filters.len())
            .finish()
    }
}
