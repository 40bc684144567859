/// A form value that has passed sanitization and is safe to persist or emit.
///
/// `Verified<T>` is the only type the metadata write path accepts, which
/// makes the sanitizer the single bottleneck between a submission and the
/// store.
///
/// # Construction
///
/// There is no public constructor and no `From<T>` impl; external code
/// cannot wrap arbitrary values. Sanitizers call
/// [`new_unchecked`](Self::new_unchecked) after their checks pass.
///
/// # Examples
///
/// External callers cannot create `Verified<T>` directly:
///
/// ```compile_fail
/// use content_gate::Verified;
///
/// let verified = Verified::new("data".to_string()); // no such constructor
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verified<T> {
    inner: T,
}

impl<T> Verified<T> {
    /// Wraps a value without validating it.
    ///
    /// Crate-internal on purpose: callers are responsible for having
    /// validated the value first. Only sanitizer implementations and the
    /// fail-open defaults in the save path use this.
    pub(crate) fn new_unchecked(value: T) -> Self {
        Self { inner: value }
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> AsRef<T> for Verified<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verified_as_ref_returns_reference() {
        let verified = Verified::new_unchecked("editor".to_string());
        assert_eq!(verified.as_ref(), "editor");
    }

    #[test]
    fn verified_into_inner_returns_value() {
        let verified = Verified::new_unchecked("1".to_string());
        assert_eq!(verified.into_inner(), "1");
    }

    #[test]
    fn verified_prevents_direct_construction() {
        // These would not compile if uncommented:
        // let v = Verified { inner: 42 }; // private field
        // let v = Verified::new(42); // no such method
        // let v: Verified<i32> = 42.into(); // no From impl

        let _ = Verified::new_unchecked(42);
    }
}
