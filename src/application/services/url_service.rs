//! Alias to URL mapping service.

use std::sync::Arc;

use crate::domain::entities::Record;
use crate::domain::repositories::UrlRepository;
use crate::error::StoreError;

const OP_SAVE: &str = "url_service.save";

/// Service for storing and resolving aliases.
///
/// Rejects empty input to `save` before it reaches the repository and logs
/// every outcome. Lookups and deletes pass any alias through; an empty one
/// simply matches nothing. URL syntax is not checked; that belongs to whoever accepts the
/// URL from the user.
pub struct UrlService<R: UrlRepository> {
    repository: Arc<R>,
}

impl<R: UrlRepository> UrlService<R> {
    /// Creates a new URL service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores `url` under `alias` and returns the new record id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidInput`] if `url` or `alias` is empty.
    /// Returns [`StoreError::AliasExists`] if the alias is taken; the existing
    /// mapping is left as is.
    /// Returns [`StoreError::Storage`] on database errors.
    pub async fn save(&self, url: &str, alias: &str) -> Result<i64, StoreError> {
        ensure_not_empty(OP_SAVE, "alias", alias)?;
        ensure_not_empty(OP_SAVE, "url", url)?;

        match self.repository.save(url, alias).await {
            Ok(id) => {
                tracing::info!(id, alias, "URL saved");
                Ok(id)
            }
            Err(e) => {
                log_failure(&e);
                Err(e)
            }
        }
    }

    /// Resolves `alias` to its URL.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for unknown aliases.
    /// Returns [`StoreError::Storage`] on database errors.
    pub async fn get(&self, alias: &str) -> Result<String, StoreError> {
        let result = self.repository.get_by_alias(alias).await;
        match &result {
            Ok(url) => tracing::debug!(alias, url = %url, "alias resolved"),
            Err(e) => log_failure(e),
        }
        result
    }

    /// Deletes the mapping for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the alias does not exist.
    /// Returns [`StoreError::Storage`] on database errors.
    pub async fn delete(&self, alias: &str) -> Result<(), StoreError> {
        let result = self.repository.delete_by_alias(alias).await;
        match &result {
            Ok(()) => tracing::info!(alias, "URL deleted"),
            Err(e) => log_failure(e),
        }
        result
    }

    /// Lists every stored record. Order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on database errors.
    pub async fn list(&self) -> Result<Vec<Record>, StoreError> {
        let result = self.repository.list_all().await;
        match &result {
            Ok(records) => tracing::debug!(count = records.len(), "records listed"),
            Err(e) => log_failure(e),
        }
        result
    }
}

fn ensure_not_empty(op: &'static str, field: &str, value: &str) -> Result<(), StoreError> {
    if value.is_empty() {
        return Err(StoreError::invalid_input(
            op,
            format!("{field} must not be empty"),
        ));
    }
    Ok(())
}

fn log_failure(e: &StoreError) {
    if e.is_recoverable() {
        tracing::warn!(op = e.op(), error = %e, "URL store request rejected");
    } else {
        tracing::error!(op = e.op(), error = %e, "URL store operation failed");
    }
}
