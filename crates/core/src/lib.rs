//! Domain types and pure helpers shared by the catalog backend and client.
//!
//! This crate has no internal dependencies so it can be used from the
//! API/repository layer as well as any CLI or client tooling.

pub mod error;
pub mod listing;
pub mod types;
