//! Rendering flow demonstration.
//!
//! Walks one restricted item through the three viewer outcomes:
//! 1. Authorized viewer sees the original content and title
//! 2. Logged-in but unauthorized viewer gets the denial notice
//! 3. Anonymous viewer gets a login form pointing back to the page
//!
//! Run with: `cargo run --example render_flow`

use std::rc::Rc;

use content_gate::host::{BasicLoginForm, Hooks, RenderRequest, RequestUrl};
use content_gate::{
    AnonymousViewer, ContentGate, ItemId, MemoryMetaStore, MetaStore, Principal, SessionTokens,
    SessionViewer, StaticRoles, Viewer, RESTRICT_ACCESS_KEY, SELECTED_ROLE_KEY,
};

fn render(hooks: &Hooks, viewer: &dyn Viewer, label: &str) {
    let request = RenderRequest {
        item: ItemId(42),
        viewer,
        url: RequestUrl::new(true, "example.test", "/board/minutes"),
    };

    let mut emitted = String::new();
    let content = hooks.apply_content_filters(
        &request,
        "<p>Q3 board minutes: the full text.</p>".to_string(),
        &mut emitted,
    );
    let title = hooks.apply_title_filters(&request, "Q3 Board Minutes".to_string());

    println!("--- {label} ---");
    println!("title:    {title}");
    println!(
        "returned: {}",
        if content.is_empty() { "(empty)" } else { content.as_str() }
    );
    if emitted.is_empty() {
        println!("emitted:  (nothing)");
    } else {
        println!("emitted:\n{emitted}");
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let store = Rc::new(MemoryMetaStore::new());
    let mut hooks = Hooks::new();
    ContentGate::new(
        store.clone(),
        Rc::new(SessionTokens::new()),
        Rc::new(StaticRoles::defaults()),
        Rc::new(BasicLoginForm),
    )
    .install(&mut hooks);

    // An editor restricted item 42 to the "editor" role
    store.update(ItemId(42), RESTRICT_ACCESS_KEY, "1");
    store.update(ItemId(42), SELECTED_ROLE_KEY, "editor");

    let editor = SessionViewer::new(Principal {
        id: "user-1".to_string(),
        name: "Alice".to_string(),
    })
    .grant("editor");
    render(&hooks, &editor, "editor (authorized)");

    let subscriber = SessionViewer::new(Principal {
        id: "user-2".to_string(),
        name: "Bob".to_string(),
    })
    .grant("subscriber");
    render(&hooks, &subscriber, "subscriber (denied)");

    render(&hooks, &AnonymousViewer, "anonymous (login prompt)");
}
