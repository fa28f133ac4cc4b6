//! Repository trait for alias to URL storage.

use crate::domain::entities::Record;
use crate::error::StoreError;
use async_trait::async_trait;

/// Storage interface for alias to URL mappings.
///
/// Each method maps to exactly one database statement, so implementations
/// need no locking of their own.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores a new mapping and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AliasExists`] if the alias is already taken.
    /// Returns [`StoreError::InvalidInput`] if `url` or `alias` is empty.
    /// Returns [`StoreError::Storage`] on database errors.
    async fn save(&self, url: &str, alias: &str) -> Result<i64, StoreError>;

    /// Returns the URL stored under `alias`. Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has this alias.
    /// Returns [`StoreError::Storage`] on database errors.
    async fn get_by_alias(&self, alias: &str) -> Result<String, StoreError>;

    /// Removes the mapping stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if nothing was deleted.
    /// Returns [`StoreError::Storage`] on database errors.
    async fn delete_by_alias(&self, alias: &str) -> Result<(), StoreError>;

    /// Returns every stored record in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on database errors. Rows read before the
    /// failure are discarded.
    async fn list_all(&self) -> Result<Vec<Record>, StoreError>;
}
