//! Login-form rendering boundary.

use crate::html::escape_attr;

/// Configuration for a rendered login form.
///
/// Field ids and labels mirror what publishing hosts conventionally emit;
/// the plugin fills the labels from its translation catalog and sets
/// `redirect` to the originally requested URL so a successful login lands
/// the visitor back on the page they asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginFormArgs {
    /// URL to return to after a successful login
    pub redirect: String,
    /// Whether to offer a "remember me" control
    pub remember: bool,
    /// `id` attribute of the form element
    pub form_id: String,
    /// `id` of the username input
    pub id_username: String,
    /// `id` of the password input
    pub id_password: String,
    /// `id` of the remember-me checkbox
    pub id_remember: String,
    /// `id` of the submit button
    pub id_submit: String,
    /// Label for the username input
    pub label_username: String,
    /// Label for the password input
    pub label_password: String,
    /// Label for the remember-me checkbox
    pub label_remember: String,
    /// Label for the submit button
    pub label_log_in: String,
    /// Pre-filled username value
    pub value_username: String,
    /// Whether the remember-me checkbox starts checked
    pub value_remember: bool,
}

impl LoginFormArgs {
    /// Creates the conventional argument set for a given redirect target.
    pub fn for_redirect(redirect: impl Into<String>) -> Self {
        Self {
            redirect: redirect.into(),
            remember: true,
            form_id: "loginform".to_string(),
            id_username: "user_login".to_string(),
            id_password: "user_pass".to_string(),
            id_remember: "rememberme".to_string(),
            id_submit: "login-submit".to_string(),
            label_username: "Username".to_string(),
            label_password: "Password".to_string(),
            label_remember: "Remember Me".to_string(),
            label_log_in: "Log In".to_string(),
            value_username: String::new(),
            value_remember: false,
        }
    }
}

/// The host's login-form renderer.
///
/// Opaque collaborator: the host knows where its login endpoint lives and
/// what the form must carry. The plugin only supplies [`LoginFormArgs`].
pub trait LoginForm {
    /// Renders the form as HTML.
    fn render(&self, args: &LoginFormArgs) -> String;
}

/// A plain HTML login form for tests, demos, and hosts without their own
/// renderer.
///
/// Posts to `/login` with the redirect target in a hidden field. All
/// attribute values are escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicLoginForm;

impl LoginForm for BasicLoginForm {
    fn render(&self, args: &LoginFormArgs) -> String {
        let mut form = String::new();
        form.push_str(&format!(
            "<form id=\"{}\" method=\"post\" action=\"/login\">\n",
            escape_attr(&args.form_id)
        ));
        form.push_str(&format!(
            "<input type=\"hidden\" name=\"redirect_to\" value=\"{}\">\n",
            escape_attr(&args.redirect)
        ));
        form.push_str(&format!(
            "<p><label for=\"{id}\">{label}</label><input type=\"text\" id=\"{id}\" name=\"log\" value=\"{value}\"></p>\n",
            id = escape_attr(&args.id_username),
            label = escape_attr(&args.label_username),
            value = escape_attr(&args.value_username),
        ));
        form.push_str(&format!(
            "<p><label for=\"{id}\">{label}</label><input type=\"password\" id=\"{id}\" name=\"pwd\"></p>\n",
            id = escape_attr(&args.id_password),
            label = escape_attr(&args.label_password),
        ));
        if args.remember {
            let checked = if args.value_remember { " checked" } else { "" };
            form.push_str(&format!(
                "<p><label for=\"{id}\"><input type=\"checkbox\" id=\"{id}\" name=\"rememberme\" value=\"forever\"{checked}> {label}</label></p>\n",
                id = escape_attr(&args.id_remember),
                label = escape_attr(&args.label_remember),
                checked = checked,
            ));
        }
        form.push_str(&format!(
            "<p><input type=\"submit\" id=\"{}\" value=\"{}\"></p>\n</form>\n",
            escape_attr(&args.id_submit),
            escape_attr(&args.label_log_in),
        ));
        form
    }
}
