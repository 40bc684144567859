use std::fmt;

/// A submitted form value that has not been sanitized yet.
///
/// Everything that arrives with a content save crosses the host boundary as
/// `Tainted<T>`: the restriction checkbox, the role selector, the submission
/// token. The inner value cannot be read outside this crate; the only way
/// forward is through a [`Sanitizer`](crate::Sanitizer), which promotes it
/// to [`Verified<T>`](crate::Verified).
///
/// # Examples
///
/// ```
/// use content_gate::Tainted;
///
/// let submitted = Tainted::new("editor".to_string());
///
/// // Debug output marks the value as tainted
/// assert!(format!("{:?}", submitted).contains("Tainted"));
/// ```
// The field stays private and there is no Deref/AsRef/From: any of those
// would let submitted values skip sanitization.
#[derive(Clone)]
pub struct Tainted<T> {
    inner: T,
}

impl<T> Tainted<T> {
    /// Wraps a value from an untrusted source.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Extracts the inner value for sanitization.
    ///
    /// Restricted to this crate so that only sanitizer implementations can
    /// unwrap a tainted value, and only on their way to producing a
    /// `Verified<T>`.
    pub(crate) fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: fmt::Debug> fmt::Debug for Tainted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tainted")
            .field("inner", &self.inner)
            .finish()
    }
}
