//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries against a SQLite database.
//!
//! # Repositories
//!
//! - [`SqliteUrlRepository`] - Alias to URL storage and retrieval

pub mod schema;
pub mod sqlite_url_repository;

pub use sqlite_url_repository::{SqliteUrlRepository, StoreOptions};
