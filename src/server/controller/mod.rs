//! HTTP request handlers.
//!
//! Handlers extract and validate input, call a service and convert the returned
//! domain models into DTOs wrapped in the `ApiResponse` envelope.

pub mod business;
pub mod docs;
pub mod server;
pub mod user;

#[cfg(test)]
mod test;
