use sqlx::PgPool;

use stockroom_core::stock::{derive_status, StockStatus};
use stockroom_db::models::asset::{AssetFilter, CreateAsset, UpdateAsset};
use stockroom_db::models::catalog::CatalogKind;
use stockroom_db::repositories::{AssetRepo, CatalogRepo};

fn new_asset(name: &str, category: &str, location: &str, quantity: i64) -> CreateAsset {
    CreateAsset {
        name: name.to_string(),
        serial: format!("SN-{name}"),
        category: category.to_string(),
        location: location.to_string(),
        purchase_date: None,
        quantity,
    }
}

async fn seed_catalog(pool: &PgPool, category: &str, location: &str) {
    CatalogRepo::add(pool, CatalogKind::Category, category)
        .await
        .unwrap();
    CatalogRepo::add(pool, CatalogKind::Location, location)
        .await
        .unwrap();
}

#[sqlx::test(migrations = "../../migrations")]
async fn status_is_derived_on_every_read(pool: PgPool) {
    seed_catalog(&pool, "IT Equipment", "Warehouse 1").await;

    let created = AssetRepo::create(&pool, &new_asset("Laptop", "IT Equipment", "Warehouse 1", 0))
        .await
        .unwrap();
    // The SQL derivation must agree with the domain function.
    assert_eq!(created.status, derive_status(0).as_str());
    assert_eq!(created.status, "out_of_stock");

    let fetched = AssetRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(fetched.status, "out_of_stock");

    let updated = AssetRepo::update(
        &pool,
        created.id,
        &UpdateAsset {
            quantity: Some(4),
            location: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.status, "in_stock");
    assert_eq!(updated.quantity, 4);
}

#[sqlx::test(migrations = "../../migrations")]
async fn find_by_id_returns_none_for_unknown_id(pool: PgPool) {
    assert!(AssetRepo::find_by_id(&pool, 42).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn empty_status_set_matches_nothing(pool: PgPool) {
    seed_catalog(&pool, "IT Equipment", "Warehouse 1").await;
    AssetRepo::create(&pool, &new_asset("Laptop", "IT Equipment", "Warehouse 1", 3))
        .await
        .unwrap();

    // Deselecting every status yields an empty page, not an error and not
    // the unfiltered list.
    let filter = AssetFilter {
        search: None,
        statuses: Some(Vec::new()),
        locations: None,
    };
    assert!(AssetRepo::list(&pool, &filter).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn filters_compose_as_conjunction(pool: PgPool) {
    seed_catalog(&pool, "IT Equipment", "Warehouse 1").await;
    seed_catalog(&pool, "IT Equipment", "Office A").await;

    AssetRepo::create(&pool, &new_asset("Laptop", "IT Equipment", "Warehouse 1", 3))
        .await
        .unwrap();
    AssetRepo::create(&pool, &new_asset("Laptop Dock", "IT Equipment", "Office A", 3))
        .await
        .unwrap();
    AssetRepo::create(&pool, &new_asset("Cable", "IT Equipment", "Warehouse 1", 0))
        .await
        .unwrap();

    let filter = AssetFilter {
        search: Some("lap".to_string()),
        statuses: Some(vec![StockStatus::InStock]),
        locations: Some(vec!["Warehouse 1".to_string()]),
    };
    let matches = AssetRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Laptop");
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_orders_by_insertion_id(pool: PgPool) {
    seed_catalog(&pool, "IT Equipment", "Warehouse 1").await;

    for name in ["Zebra Cable", "Adapter", "Monitor"] {
        AssetRepo::create(&pool, &new_asset(name, "IT Equipment", "Warehouse 1", 1))
            .await
            .unwrap();
    }

    let all = AssetRepo::list(&pool, &AssetFilter::default()).await.unwrap();
    let names: Vec<&str> = all.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Zebra Cable", "Adapter", "Monitor"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn duplicate_names_are_distinct_rows(pool: PgPool) {
    seed_catalog(&pool, "IT Equipment", "Warehouse 1").await;

    let first = AssetRepo::create(&pool, &new_asset("Laptop", "IT Equipment", "Warehouse 1", 1))
        .await
        .unwrap();
    let second = AssetRepo::create(&pool, &new_asset("Laptop", "IT Equipment", "Warehouse 1", 2))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    let all = AssetRepo::list(&pool, &AssetFilter::default()).await.unwrap();
    assert_eq!(all.len(), 2);
}
