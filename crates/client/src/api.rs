//! HTTP client for the catalog's product resource.

use catalog_core::listing::SortOrder;
use catalog_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Errors surfaced by [`CatalogApi`] calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection, DNS, decode).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with an error status and a `{"message"}` body.
    #[error("{message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
}

/// A product as served by the backend.
///
/// Timestamps and any future additions are ignored; the client only renders
/// the catalog fields.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
}

/// One page of products plus pagination metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPage {
    pub data: Vec<Product>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub pages: i64,
}

/// Form payload for create and update. Fields left `None` are omitted from
/// the request body; on update that means "keep the stored value".
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Filter, sort, and pagination selections for a listing request.
#[derive(Debug, Clone)]
pub struct ListFilter {
    pub search: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: SortOrder,
    pub page: i64,
    pub limit: i64,
}

impl ListFilter {
    /// Encode the filter as query parameters, omitting server-side defaults.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if !self.search.is_empty() {
            params.push(("search", self.search.clone()));
        }
        if let Some(min) = self.min_price {
            params.push(("min_price", min.to_string()));
        }
        if let Some(max) = self.max_price {
            params.push(("max_price", max.to_string()));
        }
        if let Some(sort) = self.sort.as_param() {
            params.push(("sort", sort.to_string()));
        }
        params.push(("page", self.page.to_string()));
        params.push(("limit", self.limit.to_string()));

        params
    }
}

/// Acknowledgement body for a successful create.
#[derive(Debug, Deserialize)]
struct Created {
    id: DbId,
}

/// Typed client for the `/api/v1/products` endpoint.
pub struct CatalogApi {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogApi {
    /// Create a client for a backend at `base_url` (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn products_url(&self) -> String {
        format!("{}/api/v1/products", self.base_url)
    }

    /// Fetch one page of products matching the filter.
    pub async fn list(&self, filter: &ListFilter) -> Result<ProductPage, ApiError> {
        let response = self
            .http
            .get(self.products_url())
            .query(&filter.to_params())
            .send()
            .await?;
        decode(response).await
    }

    /// Fetch a single product by id.
    pub async fn get(&self, id: DbId) -> Result<Product, ApiError> {
        let response = self
            .http
            .get(self.products_url())
            .query(&[("id", id)])
            .send()
            .await?;
        decode(response).await
    }

    /// Create a product, returning the id assigned by the backend.
    pub async fn create(&self, input: &ProductInput) -> Result<DbId, ApiError> {
        let response = self
            .http
            .post(self.products_url())
            .json(input)
            .send()
            .await?;
        let created: Created = decode(response).await?;
        Ok(created.id)
    }

    /// Partially update a product; `None` fields keep their stored values.
    pub async fn update(&self, id: DbId, input: &ProductInput) -> Result<(), ApiError> {
        let response = self
            .http
            .put(self.products_url())
            .query(&[("id", id)])
            .json(input)
            .send()
            .await?;
        check_status(response).await
    }

    /// Delete a product.
    pub async fn delete(&self, id: DbId) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.products_url())
            .query(&[("id", id)])
            .send()
            .await?;
        check_status(response).await
    }
}

/// Decode a JSON success body, or surface the backend's `{"message"}` error.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json().await?)
    } else {
        Err(api_error(status, response).await)
    }
}

/// Discard a success body, or surface the backend's `{"message"}` error.
async fn check_status(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(api_error(status, response).await)
    }
}

async fn api_error(status: reqwest::StatusCode, response: reqwest::Response) -> ApiError {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("request failed with status {status}"),
    };
    tracing::debug!(%status, %message, "API request failed");

    ApiError::Api { status, message }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
