//! Database repository layer.
//!
//! Repositories hold a borrowed connection and nothing else. They use SeaORM entity
//! models internally and return domain models, converting at this boundary.

pub mod business;
pub mod server;
pub mod user;

#[cfg(test)]
mod test;
