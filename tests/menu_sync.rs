//! Remote catalog sync against a mock HTTP backend: wholesale replacement,
//! atomic failure, and the reload-after-create policy.

mod common;

use bistro::AppError;
use common::TestContext;

const MENU_ONE: &str =
    r#"[{"id":1,"name":"Dosa","category":"Tiffin","price":50.0,"desc":"","img":""}]"#;
const MENU_TWO: &str = r#"[
  {"id":1,"name":"Dosa","category":"Tiffin","price":50.0,"desc":"","img":""},
  {"id":2,"name":"Payasam","category":"Desserts","price":45.0,"desc":"","img":""}
]"#;

fn context_for(server: &mockito::Server) -> TestContext {
    let ctx = TestContext::new();
    ctx.write_config(&format!(
        "[api]\nbase_url = \"{}/\"\ntimeout_secs = 2\n",
        server.url()
    ));
    ctx
}

#[test]
fn sync_replaces_and_persists_the_catalog_wholesale() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/menu")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(MENU_ONE)
        .create();

    let ctx = context_for(&server);
    let mut engine = bistro::open_in(ctx.work_dir(), false).unwrap();

    assert_eq!(engine.reload_menu().unwrap(), 1);
    assert_eq!(engine.catalog_items()[0].name, "Dosa");
    assert!(ctx.state_file("catalog.json").exists());

    // A reopened storefront sees the persisted catalog without the network.
    let reopened = bistro::open_in(ctx.work_dir(), true).unwrap();
    assert_eq!(reopened.catalog_items().len(), 1);
}

#[test]
fn failed_sync_falls_back_to_the_persisted_catalog() {
    let mut server = mockito::Server::new();
    let ok = server
        .mock("GET", "/menu")
        .with_status(200)
        .with_body(MENU_ONE)
        .expect(1)
        .create();

    let ctx = context_for(&server);
    {
        let mut engine = bistro::open_in(ctx.work_dir(), false).unwrap();
        assert!(engine.sync_menu());
    }
    ok.assert();

    // Backend starts failing; the storefront keeps serving the last good set.
    let _down = server.mock("GET", "/menu").with_status(500).create();
    let mut engine = bistro::open_in(ctx.work_dir(), false).unwrap();

    let before = engine.catalog_items().to_vec();
    assert!(!engine.sync_menu());
    assert_eq!(engine.catalog_items(), before.as_slice());

    let result = engine.reload_menu();
    assert!(matches!(result, Err(AppError::MenuFetch { .. })));
    assert_eq!(engine.catalog_items(), before.as_slice());
}

#[test]
fn admin_create_goes_remote_then_reloads_everything() {
    let mut server = mockito::Server::new();
    let create = server
        .mock("POST", "/items")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true, "message": "Item added"}"#)
        .expect(1)
        .create();
    // The engine must not trust its optimistic local state: the post-create
    // fetch is the source of truth.
    let fetch = server
        .mock("GET", "/menu")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(MENU_TWO)
        .expect(1)
        .create();

    let ctx = context_for(&server);
    let mut engine = bistro::open_in(ctx.work_dir(), false).unwrap();

    let draft = bistro::ItemDraft {
        name: "Payasam".to_string(),
        category: "Desserts".to_string(),
        price: 45.0,
        desc: String::new(),
        img: String::new(),
    };
    assert_eq!(engine.create_item(draft).unwrap(), 2);
    assert!(engine.catalog_items().iter().any(|i| i.name == "Payasam"));

    create.assert();
    fetch.assert();
}

#[test]
fn rejected_remote_create_leaves_the_catalog_alone() {
    let mut server = mockito::Server::new();
    let _create = server
        .mock("POST", "/items")
        .with_status(200)
        .with_body(r#"{"success": false, "message": "duplicate item"}"#)
        .create();
    let fetch = server.mock("GET", "/menu").expect(0).create();

    let ctx = context_for(&server);
    let mut engine = bistro::open_in(ctx.work_dir(), false).unwrap();

    let draft = bistro::ItemDraft {
        name: "Payasam".to_string(),
        category: "Desserts".to_string(),
        price: 45.0,
        desc: String::new(),
        img: String::new(),
    };
    let result = engine.create_item(draft);
    assert!(matches!(result, Err(AppError::RemoteRejected(ref msg)) if msg.contains("duplicate")));
    assert!(engine.catalog_items().is_empty());
    fetch.assert();
}
