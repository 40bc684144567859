use crate::host::{EditScreen, Emit};
use crate::html::{escape_attr, escape_text};
use crate::i18n::Catalog;
use crate::meta::{MetaStore, Restriction, RESTRICT_ACCESS_KEY, SELECTED_ROLE_KEY};
use crate::roles::RoleDirectory;
use crate::save::{TOKEN_ACTION, TOKEN_FIELD};
use crate::token::TokenService;

/// Renders the restriction controls into the edit screen's field area.
///
/// Emits, in order: the section label, the restriction checkbox (checked
/// when the stored flag is truthy), the role-selector box populated from
/// the role directory with the stored role pre-selected, and a hidden
/// one-time submission token field. An item that was never saved renders
/// the unrestricted defaults.
pub(crate) fn render_fields(
    store: &dyn MetaStore,
    roles: &dyn RoleDirectory,
    tokens: &dyn TokenService,
    catalog: &Catalog,
    screen: &EditScreen,
    out: &mut dyn Emit,
) {
    let restriction = match screen.item {
        Some(item) => Restriction::load(store, item),
        None => Restriction::none(),
    };
    let token = tokens.issue(TOKEN_ACTION);

    out.emit(&format!(
        "<p><strong>{}</strong></p>\n",
        escape_text(catalog.translate("Restrict access by role?"))
    ));

    let checked = if restriction.is_enabled() { " checked" } else { "" };
    out.emit(&format!(
        "<input type=\"checkbox\" name=\"{name}\" value=\"1\" class=\"content-gate-restrict-access\"{checked}> {label}\n",
        name = RESTRICT_ACCESS_KEY,
        checked = checked,
        label = escape_text(catalog.translate("Yes")),
    ));

    out.emit("<div class=\"content-gate-role-box\">\n");
    out.emit(&format!(
        "<p><strong>{}</strong></p>\n",
        escape_text(catalog.translate("Select a role"))
    ));
    out.emit(&format!(
        "<label class=\"screen-reader-text\" for=\"{name}\">{label}</label>\n",
        name = SELECTED_ROLE_KEY,
        label = escape_text(catalog.translate("Select role")),
    ));
    out.emit(&format!(
        "<select name=\"{name}\" id=\"{name}\" class=\"content-gate-role-select\">\n",
        name = SELECTED_ROLE_KEY,
    ));
    for (slug, display_name) in roles.roles() {
        let selected = if restriction.role() == Some(&slug) {
            " selected"
        } else {
            ""
        };
        out.emit(&format!(
            "<option value=\"{value}\"{selected}>{text}</option>\n",
            value = escape_attr(slug.as_str()),
            selected = selected,
            text = escape_text(&display_name),
        ));
    }
    out.emit("</select>\n</div>\n");

    out.emit(&format!(
        "<input type=\"hidden\" name=\"{name}\" value=\"{value}\">\n",
        name = TOKEN_FIELD,
        value = escape_attr(token.as_str()),
    ));
}
