//! Product entity model and DTOs.

use catalog_core::error::CoreError;
use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product.
///
/// `name` and `price` are required by the domain but optional at the serde
/// level so that a missing field surfaces as a 400 validation error rather
/// than a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    #[serde(default)]
    pub name: String,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl CreateProduct {
    /// Check the create-time invariants: non-empty name, present and
    /// non-negative price.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() || self.price.is_none() {
            return Err(CoreError::Validation(
                "Name and price are required".to_string(),
            ));
        }
        if self.price.is_some_and(|p| p < 0.0) {
            return Err(CoreError::Validation(
                "Price must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// DTO for updating an existing product. All fields are optional; absent or
/// null fields retain their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}

impl UpdateProduct {
    /// A price, when supplied, must still be non-negative. Name and price
    /// presence are create-time invariants only.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.price.is_some_and(|p| p < 0.0) {
            return Err(CoreError::Validation(
                "Price must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Filter, sort, and pagination parameters for product listings
/// (`?search=&min_price=&max_price=&sort=&page=&limit=`).
///
/// Page and limit are clamped in the repository via
/// `catalog_core::listing::{clamp_page, clamp_limit}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListQuery {
    pub search: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// One page of matching products plus pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct ProductPage {
    pub data: Vec<Product>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub pages: i64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
