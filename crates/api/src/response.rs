//! Shared response types for API handlers.
//!
//! Success responses for mutating operations carry a human-readable
//! `message`; creation additionally returns the new record's id. Use these
//! instead of ad-hoc `serde_json::json!` literals to get compile-time type
//! safety and consistent serialization.

use catalog_core::types::DbId;
use serde::Serialize;

/// Standard `{ "message": ... }` acknowledgement for updates and deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `{ "message": ..., "id": ... }` acknowledgement for creation, so the
/// client can navigate to the new record.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: DbId,
}
