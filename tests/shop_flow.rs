use bookstore::seed::default_catalog;
use bookstore::storage::memstore::MemoryBackend;
use bookstore::storage::{BOOKS_KEY, USERS_KEY};
use bookstore::types::{Book, BookId, ShippingInfo};
use bookstore::{ShopError, StorageBackend, StoreContext};

fn ids(ctx: &StoreContext<MemoryBackend>) -> Vec<String> {
    ctx.account()
        .cart()
        .unwrap()
        .iter()
        .map(|id| id.as_str().to_string())
        .collect()
}

#[test]
fn alice_shops_and_spends_points() {
    let ctx = StoreContext::new(MemoryBackend::new());

    ctx.users().register("alice".into(), "pw1".into()).unwrap();
    ctx.session().login(&"alice".into(), "pw1").unwrap();
    assert!(ctx.session().is_logged_in().unwrap());

    ctx.account().add_to_cart("book3".into()).unwrap();
    assert_eq!(ids(&ctx), ["book3"]);

    ctx.account().add_points(100).unwrap();
    ctx.account().use_points(30).unwrap();
    assert_eq!(ctx.account().points().unwrap(), 70);

    ctx.session().logout().unwrap();
    assert_eq!(ctx.account().points().unwrap(), 0);
    assert!(ctx.account().cart().unwrap().is_empty());
    assert!(ctx.account().favorites().unwrap().is_empty());
    assert!(ctx.account().purchased().unwrap().is_empty());
    assert_eq!(ctx.account().shipping_data().unwrap(), None);

    // State is still there for the next login.
    ctx.session().login(&"alice".into(), "pw1").unwrap();
    assert_eq!(ctx.account().points().unwrap(), 70);
    assert_eq!(ids(&ctx), ["book3"]);
}

#[test]
fn duplicate_registration_is_rejected() {
    let ctx = StoreContext::new(MemoryBackend::new());
    for name in ["alice", "bob", ""] {
        ctx.users().register(name.into(), "pw".into()).unwrap();
        let err = ctx.users().register(name.into(), "pw".into()).unwrap_err();
        assert!(matches!(err, ShopError::DuplicateUsername(_)));

        let count = ctx
            .users()
            .load_users()
            .unwrap()
            .iter()
            .filter(|u| u.username.as_str() == name)
            .count();
        assert_eq!(count, 1);
    }
}

#[test]
fn invalid_login_does_not_authenticate() {
    let ctx = StoreContext::new(MemoryBackend::new());
    ctx.users().register("alice".into(), "pw1".into()).unwrap();

    let err = ctx.session().login(&"alice".into(), "PW1").unwrap_err();
    assert!(matches!(err, ShopError::InvalidCredentials));
    assert!(!ctx.session().is_logged_in().unwrap());
    assert!(matches!(
        ctx.account().add_to_cart("book1".into()),
        Err(ShopError::NotAuthenticated)
    ));
}

#[test]
fn seed_is_a_first_run_initializer() {
    let ctx = StoreContext::new(MemoryBackend::new());
    let seed = default_catalog();
    assert!(ctx.catalog().seed_if_empty(&seed).unwrap());

    let other = vec![Book {
        id: BookId::from("x1"),
        title: "Other".into(),
        author: "Nobody".into(),
        genre: "Fantasy".into(),
        price: 1.0,
        image: "img/x.jpg".into(),
    }];
    let stored_before = ctx.backend().get(BOOKS_KEY).unwrap();
    assert!(!ctx.catalog().seed_if_empty(&other).unwrap());

    assert_eq!(ctx.backend().get(BOOKS_KEY).unwrap(), stored_before);
    assert_eq!(ctx.catalog().all().unwrap(), seed);
}

#[test]
fn fantasy_is_the_harry_potter_series() {
    let ctx = StoreContext::new(MemoryBackend::new());
    ctx.catalog().seed_if_empty(&default_catalog()).unwrap();

    let ids: Vec<String> = ctx
        .catalog()
        .by_genre("Fantasy")
        .unwrap()
        .into_iter()
        .map(|b| b.id.0)
        .collect();
    let expected: Vec<String> = (6..=12).map(|n| format!("book{n}")).collect();
    assert_eq!(ids, expected);
}

#[test]
fn stored_users_use_the_documented_shape() {
    let ctx = StoreContext::new(MemoryBackend::new());
    ctx.users().register("alice".into(), "pw1".into()).unwrap();
    ctx.session().login(&"alice".into(), "pw1").unwrap();
    ctx.account().add_to_favorites("book1".into()).unwrap();
    ctx.account()
        .save_shipping_data(ShippingInfo {
            name: "Alice".into(),
            address: "Main 1".into(),
            city: "Warsaw".into(),
            zipcode: "00-001".into(),
            phone: "600".into(),
        })
        .unwrap();

    let text = ctx.backend().get(USERS_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "username": "alice",
            "password": "pw1",
            "cart": [],
            "favorites": ["book1"],
            "purchased": [],
            "points": 0,
            "shippingData": {
                "name": "Alice",
                "address": "Main 1",
                "city": "Warsaw",
                "zipcode": "00-001",
                "phone": "600"
            }
        }])
    );
}

#[test]
fn data_written_by_hand_is_readable() {
    let backend = MemoryBackend::new();
    backend
        .set(
            USERS_KEY,
            r#"[{"username":"carol","password":"x","cart":["book2","book2"],
                "favorites":[],"purchased":["book9"],"points":15,"shippingData":null}]"#,
        )
        .unwrap();
    backend.set("currentUser", "carol").unwrap();

    let ctx = StoreContext::new(backend);
    assert_eq!(ids(&ctx), ["book2"]);
    assert_eq!(ctx.account().points().unwrap(), 15);
    assert_eq!(ctx.account().purchased().unwrap().len(), 1);
}

/// Two contexts over one backend model two browser tabs. A record loaded by
/// one and written back after the other changed it wipes that change.
#[test]
fn stale_full_record_write_loses_other_update() {
    let backend = MemoryBackend::new();
    let tab_a = StoreContext::new(backend.clone());
    let tab_b = StoreContext::new(backend);

    tab_a.users().register("alice".into(), "pw".into()).unwrap();
    tab_a.session().login(&"alice".into(), "pw").unwrap();

    let mut snapshot = tab_a.session().current_user().unwrap().unwrap();

    tab_b.account().add_to_cart("book1".into()).unwrap();
    assert_eq!(ids(&tab_a), ["book1"]);

    snapshot.points = 5;
    tab_a.users().replace(&snapshot).unwrap();

    assert_eq!(tab_b.account().points().unwrap(), 5);
    assert!(tab_b.account().cart().unwrap().is_empty());
}

#[test]
fn logout_in_one_tab_logs_out_both() {
    let backend = MemoryBackend::new();
    let tab_a = StoreContext::new(backend.clone());
    let tab_b = StoreContext::new(backend);

    tab_a.users().register("alice".into(), "pw".into()).unwrap();
    tab_a.session().login(&"alice".into(), "pw").unwrap();
    assert!(tab_b.session().is_logged_in().unwrap());

    tab_b.session().logout().unwrap();
    assert!(!tab_a.session().is_logged_in().unwrap());
    assert!(matches!(
        tab_a.account().use_points(0),
        Err(ShopError::NotAuthenticated)
    ));
}

#[test]
fn separate_contexts_are_isolated() {
    let first = StoreContext::new(MemoryBackend::new());
    let second = StoreContext::new(MemoryBackend::new());

    first.users().register("alice".into(), "pw".into()).unwrap();
    second.users().register("alice".into(), "pw".into()).unwrap();
    first.session().login(&"alice".into(), "pw").unwrap();

    assert!(!second.session().is_logged_in().unwrap());
}
