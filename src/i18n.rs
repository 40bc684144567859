use std::collections::HashMap;

/// Text domain under which this plugin registers its translations.
pub const TEXT_DOMAIN: &str = "content-gate";

/// A message catalog for one text domain.
///
/// Lookup is by msgid; an unknown msgid translates to itself, so an empty
/// catalog yields the built-in English strings.
///
/// # Examples
///
/// ```
/// use content_gate::Catalog;
///
/// let catalog = Catalog::new().with_entry("Log In", "Entrar");
/// assert_eq!(catalog.translate("Log In"), "Entrar");
/// assert_eq!(catalog.translate("Password"), "Password");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a translation, returning the catalog for chaining.
    pub fn with_entry(mut self, msgid: impl Into<String>, translation: impl Into<String>) -> Self {
        self.entries.insert(msgid.into(), translation.into());
        self
    }

    /// Translates a msgid, falling back to the msgid itself.
    pub fn translate<'a>(&'a self, msgid: &'a str) -> &'a str {
        self.entries.get(msgid).map(String::as_str).unwrap_or(msgid)
    }

    /// Number of registered translations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no translations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The host's registry of loaded translation catalogs, keyed by text domain.
///
/// The plugin registers its catalog here when the host fires the
/// catalog-load hook.
#[derive(Debug, Default)]
pub struct TranslationRegistry {
    catalogs: HashMap<String, Catalog>,
}

impl TranslationRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a catalog for a text domain, replacing any previous one.
    pub fn load(&mut self, domain: impl Into<String>, catalog: Catalog) {
        self.catalogs.insert(domain.into(), catalog);
    }

    /// Returns the catalog for a domain, if loaded.
    pub fn catalog(&self, domain: &str) -> Option<&Catalog> {
        self.catalogs.get(domain)
    }

    /// Whether a domain has a loaded catalog.
    pub fn is_loaded(&self, domain: &str) -> bool {
        self.catalogs.contains_key(domain)
    }
}
