use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use uuid::Uuid;

/// A one-time anti-forgery token scoping a form submission to the screen
/// that issued it.
///
/// The editor embeds one in a hidden field when it renders the restriction
/// controls; the save handler refuses to write unless the submitted token
/// verifies against the same action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionToken {
    value: String,
}

impl SubmissionToken {
    pub(crate) fn new(value: String) -> Self {
        Self { value }
    }

    /// Returns the raw token value, as embedded in the form.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for SubmissionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The host's anti-forgery token facility.
///
/// Opaque collaborator: real hosts typically derive tokens from the session
/// and a server secret. This crate only needs issue and verify.
pub trait TokenService {
    /// Issues a fresh token scoped to `action`.
    fn issue(&self, action: &str) -> SubmissionToken;

    /// Verifies a raw submitted token against `action`.
    ///
    /// Returns `true` at most once per issued token.
    fn verify(&self, raw: &str, action: &str) -> bool;
}

/// Reference token service with strict one-time semantics.
///
/// Issues UUID-backed tokens recorded against their action and consumes
/// them on first successful verification. Verification with the wrong
/// action fails without consuming the token.
///
/// # Examples
///
/// ```
/// use content_gate::{SessionTokens, TokenService};
///
/// let tokens = SessionTokens::new();
/// let token = tokens.issue("edit-fields");
///
/// assert!(tokens.verify(token.as_str(), "edit-fields"));
/// assert!(!tokens.verify(token.as_str(), "edit-fields")); // consumed
/// ```
#[derive(Debug, Default)]
pub struct SessionTokens {
    issued: RefCell<HashMap<String, String>>,
}

impl SessionTokens {
    /// Creates an empty token service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tokens issued but not yet consumed.
    pub fn outstanding(&self) -> usize {
        self.issued.borrow().len()
    }
}

impl TokenService for SessionTokens {
    fn issue(&self, action: &str) -> SubmissionToken {
        let value = Uuid::new_v4().simple().to_string();
        self.issued
            .borrow_mut()
            .insert(value.clone(), action.to_string());
        SubmissionToken::new(value)
    }

    fn verify(&self, raw: &str, action: &str) -> bool {
        let mut issued = self.issued.borrow_mut();
        let matches = issued.get(raw).map(|a| a == action).unwrap_or(false);
        if matches {
            issued.remove(raw);
        }
        matches
    }
}
