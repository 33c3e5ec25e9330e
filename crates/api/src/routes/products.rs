use axum::routing::get;
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Mount the single `/products` resource endpoint.
///
/// All five operations share the one path; GET dispatches internally on the
/// presence of `?id=`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/products",
        get(product::index)
            .post(product::create)
            .put(product::update)
            .delete(product::delete),
    )
}
