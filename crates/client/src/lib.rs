//! Typed client for the catalog API.
//!
//! [`api::CatalogApi`] speaks the backend's wire contract; [`state::ProductListState`]
//! holds a list view's filter, sort, and page selections plus the last-fetched
//! page, re-fetching when a selection changes. Rendering is left to the
//! embedding UI.

pub mod api;
pub mod state;
