//! Repository integration tests against an in-memory `SQLite` database.

use almacen_api::db::{self, CartRepository, PickupRepository};
use almacen_api::models::{NewCartItem, SelectPickup};
use almacen_core::CartItemId;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// A single connection keeps every query on the same in-memory database.
async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect to in-memory database");

    db::ensure_schema(&pool).await.expect("ensure schema");
    pool
}

fn leche() -> NewCartItem {
    NewCartItem {
        product_id: "MLA111".to_string(),
        title: "Leche entera 1L".to_string(),
        price: 500.0,
        quantity: 2,
        image: "https://example.com/leche.jpg".to_string(),
    }
}

fn pan() -> NewCartItem {
    NewCartItem {
        product_id: "MLA222".to_string(),
        title: "Pan lactal".to_string(),
        price: 300.0,
        quantity: 1,
        image: "https://example.com/pan.jpg".to_string(),
    }
}

#[tokio::test]
async fn add_then_list_includes_new_row() {
    let pool = test_pool().await;
    let repo = CartRepository::new(&pool);

    let stored = repo.insert(&leche()).await.expect("insert");
    assert!(stored.id.as_i64() > 0);
    assert_eq!(stored.title, "Leche entera 1L");
    assert_eq!(stored.quantity, 2);

    let items = repo.list().await.expect("list");
    assert_eq!(items, vec![stored]);
}

#[tokio::test]
async fn each_insert_assigns_a_fresh_id() {
    let pool = test_pool().await;
    let repo = CartRepository::new(&pool);

    let first = repo.insert(&leche()).await.expect("insert leche");
    let second = repo.insert(&pan()).await.expect("insert pan");

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn same_product_twice_creates_two_rows() {
    let pool = test_pool().await;
    let repo = CartRepository::new(&pool);

    repo.insert(&leche()).await.expect("first insert");
    repo.insert(&leche()).await.expect("second insert");

    let items = repo.list().await.expect("list");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].product_id, items[1].product_id);
    assert_ne!(items[0].id, items[1].id);
}

#[tokio::test]
async fn removing_missing_id_is_a_noop() {
    let pool = test_pool().await;
    let repo = CartRepository::new(&pool);

    let stored = repo.insert(&leche()).await.expect("insert");

    repo.delete(CartItemId::new(9999))
        .await
        .expect("delete of missing id succeeds");

    let items = repo.list().await.expect("list");
    assert_eq!(items, vec![stored]);
}

#[tokio::test]
async fn removing_existing_id_deletes_the_row() {
    let pool = test_pool().await;
    let repo = CartRepository::new(&pool);

    let stored = repo.insert(&leche()).await.expect("insert");
    repo.delete(stored.id).await.expect("delete");

    let items = repo.list().await.expect("list");
    assert!(items.is_empty());
}

#[tokio::test]
async fn pickup_selection_is_none_initially() {
    let pool = test_pool().await;
    let repo = PickupRepository::new(&pool);

    assert!(repo.current().await.expect("current").is_none());
}

#[tokio::test]
async fn select_pickup_replaces_previous_selection() {
    let pool = test_pool().await;
    let repo = PickupRepository::new(&pool);

    repo.replace(&SelectPickup {
        name: "Local Palermo".to_string(),
        address: "Guatemala 4770, Palermo, CABA".to_string(),
    })
    .await
    .expect("first select");

    let last = repo
        .replace(&SelectPickup {
            name: "Local Belgrano".to_string(),
            address: "Av. Cabildo 2230, Belgrano, CABA".to_string(),
        })
        .await
        .expect("second select");

    // Exactly one row remains, equal to the most recent payload
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pickup_selection")
        .fetch_one(&pool)
        .await
        .expect("count rows");
    assert_eq!(count, 1);

    let current = repo.current().await.expect("current").expect("selection");
    assert_eq!(current, last);
    assert_eq!(current.name, "Local Belgrano");
}
