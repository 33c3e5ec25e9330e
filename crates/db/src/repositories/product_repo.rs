//! Repository for the `products` table.

use catalog_core::listing::{
    clamp_limit, clamp_page, page_count, page_offset, SortOrder, DEFAULT_PAGE_LIMIT,
    MAX_PAGE_LIMIT,
};
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product, ProductListQuery, ProductPage, UpdateProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, price, image_url, created_at, updated_at";

/// Provides CRUD and filtered listing operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// List products matching the filter, returning one page plus the total
    /// match count.
    ///
    /// The count query and the data query share the same WHERE clause and
    /// bind values; LIMIT and OFFSET are bound as clamped integers, never
    /// interpolated from user input.
    pub async fn list(pool: &PgPool, query: &ProductListQuery) -> Result<ProductPage, sqlx::Error> {
        let page = clamp_page(query.page);
        let limit = clamp_limit(query.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = page_offset(page, limit);
        let sort = SortOrder::from_param(query.sort.as_deref());

        let (where_clause, bind_values, bind_idx) = build_product_filter(query);

        let count_sql = format!("SELECT COUNT(*)::BIGINT FROM products WHERE {where_clause}");
        let q = bind_values_scalar(sqlx::query_scalar::<_, i64>(&count_sql), &bind_values);
        let total = q.fetch_one(pool).await?;

        let data_sql = format!(
            "SELECT {COLUMNS} FROM products WHERE {where_clause} \
             ORDER BY {} \
             LIMIT ${bind_idx} OFFSET ${}",
            sort.order_by(),
            bind_idx + 1
        );
        let q = bind_values_as(sqlx::query_as::<_, Product>(&data_sql), &bind_values);
        let data = q.bind(limit).bind(offset).fetch_all(pool).await?;

        Ok(ProductPage {
            data,
            total,
            page,
            limit,
            pages: page_count(total, limit),
        })
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new product, returning the created row.
    ///
    /// Callers must run [`CreateProduct::validate`] first; the database
    /// rejects a null or negative price either way.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, description, price, image_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Update a product. Only non-`None` fields in `input` are applied; the
    /// rest keep their stored values.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                image_url = COALESCE($5, image_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Internal helpers for dynamic query building
// ---------------------------------------------------------------------------

/// Typed bind value for dynamically-built product queries.
#[derive(Debug, PartialEq)]
enum BindValue {
    Float(f64),
    Text(String),
}

/// Build the WHERE clause body and bind values from listing filter
/// parameters.
///
/// Returns `(where_clause, bind_values, next_bind_index)`. The price range
/// predicate is always present (the bounds default to `0` and `f64::MAX`);
/// a non-empty `search` adds a case-insensitive containment match on name or
/// description.
fn build_product_filter(query: &ProductListQuery) -> (String, Vec<BindValue>, u32) {
    let min_price = query.min_price.unwrap_or(0.0);
    let max_price = query.max_price.unwrap_or(f64::MAX);

    let mut clause = String::from("price >= $1 AND price <= $2");
    let mut bind_values = vec![BindValue::Float(min_price), BindValue::Float(max_price)];
    let mut bind_idx = 3u32;

    if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
        clause.push_str(&format!(
            " AND (name ILIKE ${bind_idx} OR description ILIKE ${})",
            bind_idx + 1
        ));
        let pattern = format!("%{search}%");
        bind_values.push(BindValue::Text(pattern.clone()));
        bind_values.push(BindValue::Text(pattern));
        bind_idx += 2;
    }

    (clause, bind_values, bind_idx)
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
fn bind_values_as<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for value in bind_values {
        q = match value {
            BindValue::Float(f) => q.bind(*f),
            BindValue::Text(s) => q.bind(s.as_str()),
        };
    }
    q
}

/// Bind a slice of `BindValue` to a sqlx `QueryScalar`.
fn bind_values_scalar<'q>(
    mut q: sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments> {
    for value in bind_values {
        q = match value {
            BindValue::Float(f) => q.bind(*f),
            BindValue::Text(s) => q.bind(s.as_str()),
        };
    }
    q
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
