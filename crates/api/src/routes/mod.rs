pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /products        list (GET), get (GET ?id=), create (POST),
///                  update (PUT ?id=), delete (DELETE ?id=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(products::router())
}
