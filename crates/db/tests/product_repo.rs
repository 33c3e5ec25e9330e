//! Integration tests for the product repository.
//!
//! Exercises the repository layer against a real database:
//! - Create / find / update / delete round trips
//! - Partial-update fallback semantics
//! - Filtered, sorted, paginated listing with total counts

use catalog_db::models::product::{CreateProduct, ProductListQuery, UpdateProduct};
use catalog_db::repositories::ProductRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_product(name: &str, price: f64) -> CreateProduct {
    CreateProduct {
        name: name.to_string(),
        price: Some(price),
        description: None,
        image_url: None,
    }
}

async fn seed_prices(pool: &PgPool, prices: &[f64]) {
    for (i, price) in prices.iter().enumerate() {
        ProductRepo::create(pool, &new_product(&format!("Product {i}"), *price))
            .await
            .expect("seed insert failed");
    }
}

// ---------------------------------------------------------------------------
// CRUD round trips
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn create_then_find_returns_equal_record(pool: PgPool) {
    let created = ProductRepo::create(&pool, &new_product("Widget", 9.99))
        .await
        .unwrap();

    let found = ProductRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("created product must be findable");

    assert_eq!(found.id, created.id);
    assert_eq!(found.name, "Widget");
    assert_eq!(found.price, 9.99);
    assert_eq!(found.description, None);
    assert_eq!(found.image_url, None);
}

#[sqlx::test]
async fn find_missing_id_returns_none(pool: PgPool) {
    let found = ProductRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test]
async fn ids_are_unique_across_creates(pool: PgPool) {
    let a = ProductRepo::create(&pool, &new_product("A", 1.0)).await.unwrap();
    let b = ProductRepo::create(&pool, &new_product("B", 2.0)).await.unwrap();
    assert_ne!(a.id, b.id);
}

#[sqlx::test]
async fn update_merges_partial_over_stored_values(pool: PgPool) {
    let created = ProductRepo::create(
        &pool,
        &CreateProduct {
            name: "Widget".to_string(),
            price: Some(9.99),
            description: Some("A fine widget".to_string()),
            image_url: None,
        },
    )
    .await
    .unwrap();

    let updated = ProductRepo::update(
        &pool,
        created.id,
        &UpdateProduct {
            price: Some(12.50),
            ..UpdateProduct::default()
        },
    )
    .await
    .unwrap()
    .expect("existing product must update");

    assert_eq!(updated.price, 12.50);
    assert_eq!(updated.name, "Widget");
    assert_eq!(updated.description.as_deref(), Some("A fine widget"));
}

#[sqlx::test]
async fn empty_partial_update_leaves_record_unchanged(pool: PgPool) {
    let created = ProductRepo::create(&pool, &new_product("Widget", 9.99))
        .await
        .unwrap();

    let updated = ProductRepo::update(&pool, created.id, &UpdateProduct::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, created.name);
    assert_eq!(updated.price, created.price);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.image_url, created.image_url);
}

#[sqlx::test]
async fn update_missing_id_returns_none(pool: PgPool) {
    let result = ProductRepo::update(&pool, 999_999, &UpdateProduct::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test]
async fn delete_then_find_returns_none(pool: PgPool) {
    let created = ProductRepo::create(&pool, &new_product("Doomed", 1.0))
        .await
        .unwrap();

    assert!(ProductRepo::delete(&pool, created.id).await.unwrap());
    assert!(ProductRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test]
async fn delete_missing_id_reports_no_rows(pool: PgPool) {
    assert!(!ProductRepo::delete(&pool, 999_999).await.unwrap());
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn list_defaults_to_newest_first(pool: PgPool) {
    seed_prices(&pool, &[1.0, 2.0, 3.0]).await;

    let page = ProductRepo::list(&pool, &ProductListQuery::default())
        .await
        .unwrap();

    assert_eq!(page.total, 3);
    assert_eq!(page.pages, 1);
    let ids: Vec<i64> = page.data.iter().map(|p| p.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(ids, sorted, "default order must be id descending");
}

#[sqlx::test]
async fn list_price_window_with_ascending_sort_paginates(pool: PgPool) {
    seed_prices(&pool, &[3.0, 6.0, 8.0, 9.0, 12.0]).await;

    let query = ProductListQuery {
        min_price: Some(5.0),
        max_price: Some(10.0),
        sort: Some("price_asc".to_string()),
        page: Some(1),
        limit: Some(2),
        ..ProductListQuery::default()
    };
    let page = ProductRepo::list(&pool, &query).await.unwrap();

    let prices: Vec<f64> = page.data.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![6.0, 8.0]);
    assert_eq!(page.total, 3);
    assert_eq!(page.pages, 2);

    let second = ProductRepo::list(
        &pool,
        &ProductListQuery {
            page: Some(2),
            ..query
        },
    )
    .await
    .unwrap();
    let prices: Vec<f64> = second.data.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![9.0]);
}

#[sqlx::test]
async fn list_pages_concatenate_without_duplicates(pool: PgPool) {
    seed_prices(&pool, &[1.0, 2.0, 3.0, 4.0, 5.0]).await;

    let mut seen = Vec::new();
    for page_no in 1..=3 {
        let page = ProductRepo::list(
            &pool,
            &ProductListQuery {
                page: Some(page_no),
                limit: Some(2),
                sort: Some("price_asc".to_string()),
                ..ProductListQuery::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(page.pages, 3);
        seen.extend(page.data.iter().map(|p| p.id));
    }

    assert_eq!(seen.len(), 5);
    let mut deduped = seen.clone();
    deduped.dedup();
    assert_eq!(seen, deduped);
}

#[sqlx::test]
async fn list_sorts_price_descending(pool: PgPool) {
    seed_prices(&pool, &[2.0, 9.0, 5.0]).await;

    let page = ProductRepo::list(
        &pool,
        &ProductListQuery {
            sort: Some("price_desc".to_string()),
            ..ProductListQuery::default()
        },
    )
    .await
    .unwrap();

    let prices: Vec<f64> = page.data.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![9.0, 5.0, 2.0]);
}

#[sqlx::test]
async fn list_search_matches_name_or_description_case_insensitively(pool: PgPool) {
    ProductRepo::create(&pool, &new_product("Blue Widget", 5.0))
        .await
        .unwrap();
    ProductRepo::create(
        &pool,
        &CreateProduct {
            name: "Gadget".to_string(),
            price: Some(7.0),
            description: Some("A widget-compatible gadget".to_string()),
            image_url: None,
        },
    )
    .await
    .unwrap();
    ProductRepo::create(&pool, &new_product("Sprocket", 3.0))
        .await
        .unwrap();

    let page = ProductRepo::list(
        &pool,
        &ProductListQuery {
            search: Some("WIDGET".to_string()),
            ..ProductListQuery::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(page.total, 2);
    let names: Vec<&str> = page.data.iter().map(|p| p.name.as_str()).collect();
    assert!(names.contains(&"Blue Widget"));
    assert!(names.contains(&"Gadget"));
}

#[sqlx::test]
async fn list_search_still_respects_price_bounds(pool: PgPool) {
    ProductRepo::create(&pool, &new_product("Cheap Widget", 2.0))
        .await
        .unwrap();
    ProductRepo::create(&pool, &new_product("Dear Widget", 50.0))
        .await
        .unwrap();

    let page = ProductRepo::list(
        &pool,
        &ProductListQuery {
            search: Some("widget".to_string()),
            min_price: Some(10.0),
            ..ProductListQuery::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].name, "Dear Widget");
}

#[sqlx::test]
async fn list_clamps_non_positive_page_and_limit(pool: PgPool) {
    seed_prices(&pool, &[1.0, 2.0]).await;

    let page = ProductRepo::list(
        &pool,
        &ProductListQuery {
            page: Some(0),
            limit: Some(0),
            ..ProductListQuery::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 1);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.pages, 2);
}
