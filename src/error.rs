//! Error types returned by the URL store.
//!
//! Every variant records the operation that produced it (for example
//! `storage.sqlite.save`) so callers can tell where a failure originated
//! without parsing messages.

/// Errors that can occur while opening or using the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database could not be opened or the schema could not be created.
    #[error("{op}: failed to initialize storage: {source}")]
    Initialization {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// Save hit the uniqueness constraint on `alias`.
    #[error("{op}: alias already exists: {alias}")]
    AliasExists { op: &'static str, alias: String },

    /// No record carries the requested alias.
    #[error("{op}: alias not found: {alias}")]
    NotFound { op: &'static str, alias: String },

    /// Empty alias or url.
    #[error("{op}: invalid input: {message}")]
    InvalidInput { op: &'static str, message: String },

    /// Any other engine-level failure.
    #[error("{op}: storage error: {source}")]
    Storage {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    pub fn alias_exists(op: &'static str, alias: impl Into<String>) -> Self {
        Self::AliasExists {
            op,
            alias: alias.into(),
        }
    }

    pub fn not_found(op: &'static str, alias: impl Into<String>) -> Self {
        Self::NotFound {
            op,
            alias: alias.into(),
        }
    }

    pub fn invalid_input(op: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            op,
            message: message.into(),
        }
    }

    pub fn storage(op: &'static str, source: sqlx::Error) -> Self {
        Self::Storage { op, source }
    }

    /// Name of the operation that failed.
    pub fn op(&self) -> &'static str {
        match self {
            Self::Initialization { op, .. }
            | Self::AliasExists { op, .. }
            | Self::NotFound { op, .. }
            | Self::InvalidInput { op, .. }
            | Self::Storage { op, .. } => op,
        }
    }

    pub fn is_alias_exists(&self) -> bool {
        matches!(self, Self::AliasExists { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true for failures the caller can act on (pick another alias,
    /// treat as absent, fix the input) as opposed to engine failures.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::AliasExists { .. } | Self::NotFound { .. } | Self::InvalidInput { .. }
        )
    }
}
