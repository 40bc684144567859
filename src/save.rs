use std::collections::HashMap;

use crate::item::ItemId;
use crate::meta::{write_restriction, MetaStore, RESTRICT_ACCESS_KEY, SELECTED_ROLE_KEY};
use crate::sanitizer::{AttributeSanitizer, Sanitizer};
use crate::token::TokenService;
use crate::{Tainted, Verified};

/// Form field carrying the submission token.
pub const TOKEN_FIELD: &str = "content-gate_selected_role_token";

/// Action the submission token is scoped to.
pub const TOKEN_ACTION: &str = "content-gate_selected_role";

/// The submitted form fields of one content save.
///
/// Field names match the metadata keys; every value is tainted until the
/// save handler sanitizes it.
///
/// # Examples
///
/// ```
/// use content_gate::{Submission, RESTRICT_ACCESS_KEY};
///
/// let submission = Submission::new().with_field(RESTRICT_ACCESS_KEY, "1");
/// assert!(submission.contains(RESTRICT_ACCESS_KEY));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Submission {
    fields: HashMap<String, Tainted<String>>,
}

impl Submission {
    /// Creates an empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, returning the submission for chaining.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds a field.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), Tainted::new(value.into()));
    }

    /// Returns a field's tainted value.
    pub fn field(&self, name: &str) -> Option<&Tainted<String>> {
        self.fields.get(name)
    }

    /// Whether the field was submitted at all.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }
}

/// The host-side context of one save event.
#[derive(Debug, Clone, Copy)]
pub struct SaveContext {
    /// The item being saved
    pub item: ItemId,
    /// Whether this save was triggered by the host's background autosave
    pub autosave: bool,
}

/// What the save handler did with a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Both fields were persisted.
    Saved,
    /// Background autosave; nothing was written.
    SkippedAutosave,
    /// Missing or unverifiable submission token; nothing was written.
    SkippedToken,
}

/// Persists the restriction fields from a content save.
///
/// Early exits (no write, no error): background autosaves, so a transient
/// autosave cannot clobber explicit editor intent, and submissions whose
/// token is missing or fails verification.
///
/// Otherwise: a present restriction flag is sanitized and stored verbatim;
/// an absent flag stores `"0"`. The role is sanitized and stored verbatim
/// regardless of flag state; an absent role stores the empty string. A
/// field that fails sanitization falls back to its fail-open default.
pub(crate) fn handle_save(
    store: &dyn MetaStore,
    tokens: &dyn TokenService,
    ctx: &SaveContext,
    submission: &Submission,
) -> SaveOutcome {
    if ctx.autosave {
        tracing::debug!(item = %ctx.item, "autosave; restriction fields left untouched");
        return SaveOutcome::SkippedAutosave;
    }

    let sanitizer = AttributeSanitizer::default_limits();

    let token = submission
        .field(TOKEN_FIELD)
        .cloned()
        .and_then(|tainted| sanitizer.sanitize(tainted).ok());
    let token = match token {
        Some(token) => token,
        None => {
            tracing::debug!(item = %ctx.item, "submission token missing; skipping save");
            return SaveOutcome::SkippedToken;
        }
    };
    if !tokens.verify(token.as_ref(), TOKEN_ACTION) {
        tracing::debug!(item = %ctx.item, "submission token failed verification; skipping save");
        return SaveOutcome::SkippedToken;
    }

    let flag = match submission.field(RESTRICT_ACCESS_KEY).cloned() {
        Some(tainted) => sanitizer.sanitize(tainted).unwrap_or_else(|err| {
            tracing::debug!(item = %ctx.item, error = %err, "flag failed sanitization; storing 0");
            Verified::new_unchecked("0".to_string())
        }),
        None => Verified::new_unchecked("0".to_string()),
    };

    let role = match submission.field(SELECTED_ROLE_KEY).cloned() {
        Some(tainted) => sanitizer.sanitize(tainted).unwrap_or_else(|err| {
            tracing::debug!(item = %ctx.item, error = %err, "role failed sanitization; storing empty");
            Verified::new_unchecked(String::new())
        }),
        None => Verified::new_unchecked(String::new()),
    };

    write_restriction(store, ctx.item, &flag, &role);
    tracing::debug!(item = %ctx.item, "restriction fields saved");
    SaveOutcome::Saved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::MemoryMetaStore;
    use crate::token::SessionTokens;

    fn submission_with_token(tokens: &SessionTokens) -> Submission {
        let token = tokens.issue(TOKEN_ACTION);
        Submission::new().with_field(TOKEN_FIELD, token.as_str())
    }

    #[test]
    fn saves_both_fields() {
        let store = MemoryMetaStore::new();
        let tokens = SessionTokens::new();
        let submission = submission_with_token(&tokens)
            .with_field(RESTRICT_ACCESS_KEY, "1")
            .with_field(SELECTED_ROLE_KEY, "editor");
        let ctx = SaveContext {
            item: ItemId(1),
            autosave: false,
        };

        assert_eq!(
            handle_save(&store, &tokens, &ctx, &submission),
            SaveOutcome::Saved
        );
        assert_eq!(store.get(ItemId(1), RESTRICT_ACCESS_KEY).as_deref(), Some("1"));
        assert_eq!(store.get(ItemId(1), SELECTED_ROLE_KEY).as_deref(), Some("editor"));
    }

    #[test]
    fn absent_checkbox_stores_zero_but_keeps_role() {
        let store = MemoryMetaStore::new();
        let tokens = SessionTokens::new();
        let submission = submission_with_token(&tokens).with_field(SELECTED_ROLE_KEY, "author");
        let ctx = SaveContext {
            item: ItemId(1),
            autosave: false,
        };

        assert_eq!(
            handle_save(&store, &tokens, &ctx, &submission),
            SaveOutcome::Saved
        );
        assert_eq!(store.get(ItemId(1), RESTRICT_ACCESS_KEY).as_deref(), Some("0"));
        assert_eq!(store.get(ItemId(1), SELECTED_ROLE_KEY).as_deref(), Some("author"));
    }

    #[test]
    fn absent_role_stores_empty_string() {
        let store = MemoryMetaStore::new();
        let tokens = SessionTokens::new();
        let submission = submission_with_token(&tokens).with_field(RESTRICT_ACCESS_KEY, "1");
        let ctx = SaveContext {
            item: ItemId(1),
            autosave: false,
        };

        handle_save(&store, &tokens, &ctx, &submission);
        assert_eq!(store.get(ItemId(1), SELECTED_ROLE_KEY).as_deref(), Some(""));
    }

    #[test]
    fn autosave_writes_nothing() {
        let store = MemoryMetaStore::new();
        let tokens = SessionTokens::new();
        let submission = submission_with_token(&tokens)
            .with_field(RESTRICT_ACCESS_KEY, "1")
            .with_field(SELECTED_ROLE_KEY, "editor");
        let ctx = SaveContext {
            item: ItemId(1),
            autosave: true,
        };

        assert_eq!(
            handle_save(&store, &tokens, &ctx, &submission),
            SaveOutcome::SkippedAutosave
        );
        assert!(store.is_empty());
    }

    #[test]
    fn missing_token_writes_nothing() {
        let store = MemoryMetaStore::new();
        let tokens = SessionTokens::new();
        let submission = Submission::new()
            .with_field(RESTRICT_ACCESS_KEY, "1")
            .with_field(SELECTED_ROLE_KEY, "editor");
        let ctx = SaveContext {
            item: ItemId(1),
            autosave: false,
        };

        assert_eq!(
            handle_save(&store, &tokens, &ctx, &submission),
            SaveOutcome::SkippedToken
        );
        assert!(store.is_empty());
    }

    #[test]
    fn forged_token_writes_nothing() {
        let store = MemoryMetaStore::new();
        let tokens = SessionTokens::new();
        let submission = Submission::new()
            .with_field(TOKEN_FIELD, "forged-token-value")
            .with_field(RESTRICT_ACCESS_KEY, "1");
        let ctx = SaveContext {
            item: ItemId(1),
            autosave: false,
        };

        assert_eq!(
            handle_save(&store, &tokens, &ctx, &submission),
            SaveOutcome::SkippedToken
        );
        assert!(store.is_empty());
    }

    #[test]
    fn token_is_single_use() {
        let store = MemoryMetaStore::new();
        let tokens = SessionTokens::new();
        let token = tokens.issue(TOKEN_ACTION);
        let submission = Submission::new()
            .with_field(TOKEN_FIELD, token.as_str())
            .with_field(RESTRICT_ACCESS_KEY, "1")
            .with_field(SELECTED_ROLE_KEY, "editor");
        let ctx = SaveContext {
            item: ItemId(1),
            autosave: false,
        };

        assert_eq!(
            handle_save(&store, &tokens, &ctx, &submission),
            SaveOutcome::Saved
        );
        // Replaying the same submission must not verify again
        assert_eq!(
            handle_save(&store, &tokens, &ctx, &submission),
            SaveOutcome::SkippedToken
        );
    }

    #[test]
    fn flag_value_is_stored_sanitized() {
        let store = MemoryMetaStore::new();
        let tokens = SessionTokens::new();
        let submission = submission_with_token(&tokens)
            .with_field(RESTRICT_ACCESS_KEY, "  1  ")
            .with_field(SELECTED_ROLE_KEY, "<editor>");
        let ctx = SaveContext {
            item: ItemId(1),
            autosave: false,
        };

        handle_save(&store, &tokens, &ctx, &submission);
        assert_eq!(store.get(ItemId(1), RESTRICT_ACCESS_KEY).as_deref(), Some("1"));
        assert_eq!(
            store.get(ItemId(1), SELECTED_ROLE_KEY).as_deref(),
            Some("&lt;editor&gt;")
        );
    }

    #[test]
    fn unsanitizable_role_falls_back_to_empty() {
        let store = MemoryMetaStore::new();
        let tokens = SessionTokens::new();
        let submission = submission_with_token(&tokens)
            .with_field(RESTRICT_ACCESS_KEY, "1")
            .with_field(SELECTED_ROLE_KEY, "bad\0role");
        let ctx = SaveContext {
            item: ItemId(1),
            autosave: false,
        };

        assert_eq!(
            handle_save(&store, &tokens, &ctx, &submission),
            SaveOutcome::Saved
        );
        assert_eq!(store.get(ItemId(1), SELECTED_ROLE_KEY).as_deref(), Some(""));
    }
}
