//! Handlers for the `/products` resource.
//!
//! A single endpoint carries the whole CRUD surface; the target record is
//! selected with the `?id=` query parameter rather than a path segment, and
//! GET without an id is the filtered, paginated listing.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_db::models::product::{CreateProduct, ProductListQuery, UpdateProduct};
use catalog_db::repositories::ProductRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// Optional `?id=` parameter selecting a single product.
#[derive(Debug, Deserialize)]
pub struct IdParam {
    pub id: Option<DbId>,
}

/// GET /api/v1/products with optional `?id=` and listing parameters
/// (`search`, `min_price`, `max_price`, `sort`, `page`, `limit`).
///
/// With `id` present, responds with the single record (404 when absent);
/// otherwise runs the filtered listing and responds with
/// `{data, total, page, limit, pages}`.
pub async fn index(
    State(state): State<AppState>,
    Query(IdParam { id }): Query<IdParam>,
    Query(filter): Query<ProductListQuery>,
) -> AppResult<Response> {
    match id {
        Some(id) => {
            let product = ProductRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or(CoreError::NotFound {
                    entity: "Product",
                    id,
                })?;
            Ok(Json(product).into_response())
        }
        None => {
            let page = ProductRepo::list(&state.pool, &filter).await?;
            Ok(Json(page).into_response())
        }
    }
}

/// POST /api/v1/products
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    input.validate()?;
    let product = ProductRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Product created successfully",
            id: product.id,
        }),
    ))
}

/// PUT /api/v1/products?id=
///
/// Partial update: absent or null fields keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    Query(IdParam { id }): Query<IdParam>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<Json<MessageResponse>> {
    let id = id.ok_or(CoreError::BadRequest("Product ID is required".to_string()))?;
    input.validate()?;

    ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Product",
            id,
        })?;

    Ok(Json(MessageResponse {
        message: "Product updated successfully",
    }))
}

/// DELETE /api/v1/products?id=
pub async fn delete(
    State(state): State<AppState>,
    Query(IdParam { id }): Query<IdParam>,
) -> AppResult<Json<MessageResponse>> {
    let id = id.ok_or(CoreError::BadRequest("Product ID is required".to_string()))?;

    let deleted = ProductRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }));
    }

    Ok(Json(MessageResponse {
        message: "Product deleted successfully",
    }))
}
