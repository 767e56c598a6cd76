use catalog_service::lifecycle::CatalogSystem;
use catalog_service::model::{ProductDraft, ProductId, ProductPatch};
use catalog_service::product_store::{self, ProductError};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

/// Full end-to-end test over the seeded system.
#[tokio::test]
async fn test_seeded_catalog_scenario() {
    let system = CatalogSystem::new(true);
    let client = &system.product_client;

    let all = client.list_products().await;
    assert_eq!(all.len(), 3);

    let laptop = client.get_product(ProductId(1)).await.expect("seeded");
    assert_eq!(laptop.name, "Laptop");
    assert_eq!(laptop.category, "Electronics");
    assert_eq!(laptop.price, 1299.99);
    assert_eq!(laptop.stock, 15);

    let mut accessories: Vec<String> = client
        .search_products("Accessories")
        .await
        .into_iter()
        .map(|p| p.name)
        .collect();
    accessories.sort();
    assert_eq!(accessories, vec!["Mechanical Keyboard", "Wireless Mouse"]);

    assert!(client.search_products("accessories").await.is_empty());
    assert_eq!(client.search_products("").await.len(), 3);

    let created = client
        .create_product(ProductDraft::new("USB Cable", 9.99, 200).with_category("Accessories"))
        .await;
    assert_eq!(created.id, ProductId(4));
    assert_eq!(client.search_products("Accessories").await.len(), 3);
}

#[tokio::test]
async fn test_unseeded_system_starts_empty() {
    let system = CatalogSystem::new(false);
    assert!(system.product_client.list_products().await.is_empty());

    let first = system
        .product_client
        .create_product(ProductDraft::new("A", 1.0, 1))
        .await;
    assert_eq!(first.id, ProductId(1));
}

#[tokio::test]
async fn test_ids_increase_and_are_never_reused() {
    let system = CatalogSystem::new(false);
    let client = &system.product_client;

    let a = client.create_product(ProductDraft::new("A", 1.0, 1)).await;
    let b = client.create_product(ProductDraft::new("B", 2.0, 2)).await;
    assert_eq!((a.id, b.id), (ProductId(1), ProductId(2)));

    client.delete_product(b.id).await.unwrap();
    let c = client.create_product(ProductDraft::new("C", 3.0, 3)).await;
    assert_eq!(c.id, ProductId(3));
}

#[tokio::test]
async fn test_read_after_write() {
    let system = CatalogSystem::new(false);
    let client = &system.product_client;

    let created = client
        .create_product(
            ProductDraft::new("Desk Lamp", 39.5, 7)
                .with_description("LED")
                .with_category("Home"),
        )
        .await;
    assert_eq!(created.created_at, created.updated_at);

    let fetched = client.get_product(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_sparse_update() {
    let system = CatalogSystem::new(false);
    let client = &system.product_client;
    let original = client
        .create_product(ProductDraft::new("X", 10.0, 5).with_category("C"))
        .await;

    tokio::time::sleep(Duration::from_millis(5)).await;
    let updated = client
        .update_product(
            original.id,
            ProductPatch {
                price: Some(12.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "X");
    assert_eq!(updated.price, 12.0);
    assert_eq!(updated.stock, 5);
    assert_eq!(updated.category, "C");
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at > original.updated_at);
}

#[tokio::test]
async fn test_non_positive_price_is_ignored_and_zero_stock_is_applied() {
    let system = CatalogSystem::new(false);
    let client = &system.product_client;
    let original = client.create_product(ProductDraft::new("X", 10.0, 5)).await;

    let updated = client
        .update_product(
            original.id,
            ProductPatch {
                price: Some(0.0),
                stock: Some(0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.price, 10.0);
    assert_eq!(updated.stock, 0);

    let updated = client
        .update_product(
            original.id,
            ProductPatch {
                price: Some(-4.0),
                stock: Some(-1),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.price, 10.0);
    assert_eq!(updated.stock, 0);
}

#[tokio::test]
async fn test_missing_ids_are_not_found() {
    let system = CatalogSystem::new(true);
    let client = &system.product_client;

    assert_eq!(
        client.get_product(ProductId(99)).await,
        Err(ProductError::NotFound(ProductId(99)))
    );
    assert!(client
        .update_product(ProductId(99), ProductPatch::default())
        .await
        .is_err());

    client.delete_product(ProductId(2)).await.unwrap();
    assert!(client.get_product(ProductId(2)).await.is_err());
    assert!(client.delete_product(ProductId(2)).await.is_err());
    assert_eq!(client.list_products().await.len(), 2);
}

/// Many tasks creating through the client at once get distinct ids.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates() {
    let system = Arc::new(CatalogSystem::new(false));

    let mut handles = vec![];
    for i in 0..100 {
        let system = system.clone();
        handles.push(tokio::spawn(async move {
            system
                .product_client
                .create_product(ProductDraft::new(format!("P{}", i), 1.0, 1))
                .await
                .id
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }
    assert_eq!(ids.len(), 100);
    assert_eq!(system.store().len(), 100);
}

#[test]
fn test_seed_assigns_first_ids() {
    let store = product_store::new();
    let seeded = product_store::seed(&store);
    let ids: Vec<ProductId> = seeded.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![ProductId(1), ProductId(2), ProductId(3)]);
}
