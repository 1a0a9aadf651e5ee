//! Data transfer objects shared by the HTTP layer.
//!
//! Everything in here is serialized to or deserialized from JSON and carries a
//! `ToSchema` derive so it appears in the generated OpenAPI document.

pub mod api;
pub mod business;
pub mod server;
pub mod user;
