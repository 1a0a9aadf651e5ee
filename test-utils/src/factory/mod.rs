//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let server = factory::create_server(&db).await?;
//!     let disk = factory::create_disk(&db, &server.system_name).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let server = factory::server::ServerFactory::new(&db)
//!     .system_name("web-01")
//!     .os(2)
//!     .license_id(42)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `server` - Create base server inventory rows
//! - `disk` / `network` / `partition` / `repository` - Create relation rows for a server
//! - `user` - Create user accounts
//! - `business` - Create business accounts with their address
//! - `helpers` - Shared counter for unique values

pub mod business;
pub mod disk;
pub mod helpers;
pub mod network;
pub mod partition;
pub mod repository;
pub mod server;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use business::create_business;
pub use disk::create_disk;
pub use network::create_network;
pub use partition::create_partition;
pub use repository::create_repository;
pub use server::create_server;
pub use user::create_user;
