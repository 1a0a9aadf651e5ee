//! Server inventory repositories.
//!
//! `basic` reads the filtered base list; the remaining repositories fetch relation
//! rows for a set of system names.

pub mod basic;
pub mod disk;
pub mod network;
pub mod partition;
pub mod repository;
