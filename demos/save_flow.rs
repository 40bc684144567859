//! Save flow demonstration.
//!
//! Renders the edit-screen fields, carries the issued token into a
//! submission, and shows the three save outcomes: a verified save, an
//! autosave skip, and a forged-token skip.
//!
//! Run with: `cargo run --example save_flow`

use std::rc::Rc;

use content_gate::host::{BasicLoginForm, EditScreen, Hooks};
use content_gate::{
    ContentGate, ItemId, MemoryMetaStore, MetaStore, SessionTokens, StaticRoles, Submission,
    SaveContext, RESTRICT_ACCESS_KEY, SELECTED_ROLE_KEY, TOKEN_FIELD,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let store = Rc::new(MemoryMetaStore::new());
    let mut hooks = Hooks::new();
    let gate = ContentGate::new(
        store.clone(),
        Rc::new(SessionTokens::new()),
        Rc::new(StaticRoles::defaults()),
        Rc::new(BasicLoginForm),
    )
    .install(&mut hooks);

    // 1. The edit screen renders; a one-time token is issued
    let mut form = String::new();
    hooks.render_edit_fields(
        &EditScreen {
            item: Some(ItemId(7)),
        },
        &mut form,
    );
    println!("=== rendered edit fields ===\n{form}");

    let marker = format!("name=\"{TOKEN_FIELD}\" value=\"");
    let start = form.find(&marker).expect("token field rendered") + marker.len();
    let end = form[start..].find('"').expect("closing quote") + start;
    let token = form[start..end].to_string();

    // 2. The editor submits with the restriction enabled
    let submission = Submission::new()
        .with_field(TOKEN_FIELD, token)
        .with_field(RESTRICT_ACCESS_KEY, "1")
        .with_field(SELECTED_ROLE_KEY, "editor");
    let outcome = gate.handle_save(
        &SaveContext {
            item: ItemId(7),
            autosave: false,
        },
        &submission,
    );
    println!("editor save outcome: {outcome:?}");
    println!(
        "stored: restrict_access={:?} selected_role={:?}",
        store.get(ItemId(7), RESTRICT_ACCESS_KEY),
        store.get(ItemId(7), SELECTED_ROLE_KEY),
    );

    // 3. A background autosave fires with different values; nothing changes
    let outcome = gate.handle_save(
        &SaveContext {
            item: ItemId(7),
            autosave: true,
        },
        &Submission::new().with_field(RESTRICT_ACCESS_KEY, "0"),
    );
    println!("autosave outcome:    {outcome:?}");

    // 4. A forged submission is ignored
    let outcome = gate.handle_save(
        &SaveContext {
            item: ItemId(7),
            autosave: false,
        },
        &Submission::new()
            .with_field(TOKEN_FIELD, "forged")
            .with_field(RESTRICT_ACCESS_KEY, "0"),
    );
    println!("forged save outcome: {outcome:?}");
    println!(
        "still stored: restrict_access={:?} selected_role={:?}",
        store.get(ItemId(7), RESTRICT_ACCESS_KEY),
        store.get(ItemId(7), SELECTED_ROLE_KEY),
    );
}
