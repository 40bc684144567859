use std::rc::Rc;

use crate::assets::{AssetQueue, ADMIN_ASSET_HANDLE, ADMIN_SCRIPT, ADMIN_STYLE};
use crate::editor;
use crate::filter::{evaluate_access, AccessDecision, NOTICE_MSGID, RESTRICTED_TITLE_MSGID};
use crate::host::{
    AdminScreen, EditScreen, Emit, Hooks, LoginForm, LoginFormArgs, RenderRequest,
};
use crate::html::escape_text;
use crate::i18n::{Catalog, TranslationRegistry, TEXT_DOMAIN};
use crate::meta::{MetaStore, Restriction};
use crate::roles::RoleDirectory;
use crate::save::{self, SaveContext, SaveOutcome, Submission};
use crate::token::TokenService;

/// The access-gating plugin, assembled from its host collaborators.
///
/// Constructed once at process start and installed on the host's hook
/// table; the handlers themselves are stateless and every piece of mutable
/// state lives in a collaborator the host owns.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use content_gate::host::{BasicLoginForm, Hooks};
/// use content_gate::{ContentGate, MemoryMetaStore, SessionTokens, StaticRoles};
///
/// let mut hooks = Hooks::new();
/// let gate = ContentGate::new(
///     Rc::new(MemoryMetaStore::new()),
///     Rc::new(SessionTokens::new()),
///     Rc::new(StaticRoles::defaults()),
///     Rc::new(BasicLoginForm),
/// );
/// gate.install(&mut hooks);
///
/// // Catalog load, admin assets, init, edit fields, save, content, title
/// assert_eq!(hooks.registered(), 7);
/// ```
pub struct ContentGate {
    store: Rc<dyn MetaStore>,
    tokens: Rc<dyn TokenService>,
    roles: Rc<dyn RoleDirectory>,
    login: Rc<dyn LoginForm>,
    catalog: Catalog,
}

impl ContentGate {
    /// Creates the plugin with an empty (English pass-through) catalog.
    pub fn new(
        store: Rc<dyn MetaStore>,
        tokens: Rc<dyn TokenService>,
        roles: Rc<dyn RoleDirectory>,
        login: Rc<dyn LoginForm>,
    ) -> Self {
        Self {
            store,
            tokens,
            roles,
            login,
            catalog: Catalog::new(),
        }
    }

    /// Replaces the translation catalog, returning the plugin for chaining.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Registers every handler on the host's hook table.
    ///
    /// Consumes the plugin and returns the shared handle the registered
    /// closures hold.
    pub fn install(self, hooks: &mut Hooks) -> Rc<Self> {
        let gate = Rc::new(self);

        {
            let gate = gate.clone();
            hooks.on_catalog_load(move |registry| gate.load_catalog(registry));
        }
        {
            let gate = gate.clone();
            hooks.on_admin_assets(move |screen, queue| gate.enqueue_admin_assets(screen, queue));
        }
        {
            let gate = gate.clone();
            hooks.on_init(move || gate.init());
        }
        {
            let gate = gate.clone();
            hooks.on_edit_fields(move |screen, out| gate.render_edit_fields(screen, out));
        }
        {
            let gate = gate.clone();
            hooks.on_save(move |ctx, submission| {
                gate.handle_save(ctx, submission);
            });
        }
        {
            let gate = gate.clone();
            hooks.on_content_filter(move |request: &RenderRequest<'_>, content, out: &mut dyn Emit| {
                gate.filter_content(request, content, out)
            });
        }
        {
            let gate = gate.clone();
            hooks.on_title_filter(move |request: &RenderRequest<'_>, title| {
                gate.filter_title(request, title)
            });
        }

        gate
    }

    /// Registers this plugin's catalog under its text domain.
    pub fn load_catalog(&self, registry: &mut TranslationRegistry) {
        registry.load(TEXT_DOMAIN, self.catalog.clone());
    }

    /// Marks the plugin ready once the host finished initializing.
    pub fn init(&self) {
        tracing::debug!(domain = TEXT_DOMAIN, "content gating ready");
    }

    /// Enqueues the admin script and stylesheet.
    ///
    /// The script's localized data carries the admin AJAX endpoint URL.
    pub fn enqueue_admin_assets(&self, screen: &AdminScreen, queue: &mut AssetQueue) {
        queue.enqueue_style(ADMIN_ASSET_HANDLE, ADMIN_STYLE);
        queue.enqueue_script(
            ADMIN_ASSET_HANDLE,
            ADMIN_SCRIPT,
            vec![("ajax_url".to_string(), screen.ajax_endpoint.clone())],
        );
    }

    /// Renders the restriction controls into the edit screen.
    pub fn render_edit_fields(&self, screen: &EditScreen, out: &mut dyn Emit) {
        editor::render_fields(
            self.store.as_ref(),
            self.roles.as_ref(),
            self.tokens.as_ref(),
            &self.catalog,
            screen,
            out,
        );
    }

    /// Persists a submission's restriction fields.
    ///
    /// See the crate-level docs for the early-exit rules (autosave,
    /// missing or unverifiable token).
    pub fn handle_save(&self, ctx: &SaveContext, submission: &Submission) -> SaveOutcome {
        save::handle_save(self.store.as_ref(), self.tokens.as_ref(), ctx, submission)
    }

    /// The content-render filter.
    ///
    /// Passes the content through unchanged unless the item is restricted
    /// and the viewer unauthorized; then the substitution (denial notice or
    /// login form) is written to the direct-output channel and the empty
    /// string is returned, so the host's page chrome still renders.
    pub fn filter_content(
        &self,
        request: &RenderRequest<'_>,
        content: String,
        out: &mut dyn Emit,
    ) -> String {
        let restriction = Restriction::load(self.store.as_ref(), request.item);
        let decision = evaluate_access(&restriction, request.viewer);
        tracing::trace!(item = %request.item, ?decision, "content filter");

        match decision {
            AccessDecision::Allow => content,
            AccessDecision::DenyNotice => {
                out.emit(&format!(
                    "<p>{}</p>",
                    escape_text(self.catalog.translate(NOTICE_MSGID))
                ));
                String::new()
            }
            AccessDecision::RequireLogin => {
                let args = self.login_form_args(request.url.to_absolute());
                out.emit(&self.login.render(&args));
                String::new()
            }
        }
    }

    /// The title-render filter.
    ///
    /// Substitutes the fixed heading for any viewer the decision does not
    /// allow; no login form is rendered here.
    pub fn filter_title(&self, request: &RenderRequest<'_>, title: String) -> String {
        let restriction = Restriction::load(self.store.as_ref(), request.item);
        let decision = evaluate_access(&restriction, request.viewer);
        tracing::trace!(item = %request.item, ?decision, "title filter");

        match decision {
            AccessDecision::Allow => title,
            AccessDecision::DenyNotice | AccessDecision::RequireLogin => format!(
                "<h2>{}</h2>",
                escape_text(self.catalog.translate(RESTRICTED_TITLE_MSGID))
            ),
        }
    }

    fn login_form_args(&self, redirect: String) -> LoginFormArgs {
        let mut args = LoginFormArgs::for_redirect(redirect);
        args.label_username = self.catalog.translate("Username").to_string();
        args.label_password = self.catalog.translate("Password").to_string();
        args.label_remember = self.catalog.translate("Remember Me").to_string();
        args.label_log_in = self.catalog.translate("Log In").to_string();
        args
    }
}
