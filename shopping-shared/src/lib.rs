//! # Shopping Shared Library
//!
//! This crate contains the domain types, persistence layer and
//! authentication primitives used by the shopping API server.
//!
//! ## Module Organization
//!
//! - `models`: Database models and their SQL operations
//! - `store`: The persistence abstraction handlers talk to
//! - `auth`: Tokens, password hashing and ownership checks
//! - `db`: Connection pool and migrations
//! - `fixtures`: Random data generators for tests and seeding

pub mod auth;
pub mod db;
pub mod fixtures;
pub mod models;
pub mod store;

/// Current version of the shopping shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
