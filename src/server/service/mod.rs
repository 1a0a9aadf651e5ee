//! Business logic layer.
//!
//! Services sit between controllers and repositories. They receive validated DTOs or
//! normalized options, call one or more repositories and return domain models, mapping
//! failures into `AppError`.

pub mod business;
pub mod server;
pub mod user;
