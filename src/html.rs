//! Escaping helpers for the small amount of markup this crate emits.

/// Escapes a string for use inside an HTML attribute value.
///
/// Replaces `&`, `<`, `>`, `"`, and `'` with their entity forms. Applied to
/// every stored or host-provided value the editor echoes back into the edit
/// screen, and to the redirect URL embedded in the login form.
///
/// # Examples
///
/// ```
/// use content_gate::escape_attr;
///
/// assert_eq!(escape_attr(r#"a"b"#), "a&quot;b");
/// assert_eq!(escape_attr("plain-slug"), "plain-slug");
/// ```
pub fn escape_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a string for use as HTML text content.
///
/// Replaces `&`, `<`, and `>`. Used for translated labels, the denial
/// notice, and the substituted title.
pub fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_attr_handles_all_special_chars() {
        assert_eq!(
            escape_attr(r#"<a href="x" title='y'>&"#),
            "&lt;a href=&quot;x&quot; title=&#039;y&#039;&gt;&amp;"
        );
    }

    #[test]
    fn escape_attr_passes_safe_input_through() {
        assert_eq!(escape_attr("editor"), "editor");
        assert_eq!(escape_attr("content-gate_restrict_access"), "content-gate_restrict_access");
    }

    #[test]
    fn escape_text_leaves_quotes_alone() {
        assert_eq!(escape_text(r#"say "hi" <now>"#), r#"say "hi" &lt;now&gt;"#);
    }

    #[test]
    fn escaping_is_idempotent_on_safe_output_shape() {
        // Escaped output contains no raw markup characters besides the
        // ampersands introduced by the entities themselves.
        let escaped = escape_attr("<script>alert('x')</script>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('\''));
    }
}
