//! # URL Store
//!
//! SQLite-backed storage for alias to URL mappings.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`Record`] entity and the [`UrlRepository`] contract
//! - **Application Layer** ([`application`]) - Input validation and logging via [`UrlService`]
//! - **Infrastructure Layer** ([`infrastructure`]) - The SQLite store
//!
//! ## Quick Start
//!
//! ```no_run
//! use url_store::prelude::*;
//!
//! # async fn run() -> Result<(), StoreError> {
//! let store = SqliteUrlRepository::open("storage.db").await?;
//! let id = store.save("https://example.com", "ex1").await?;
//! assert_eq!(store.get_by_alias("ex1").await?, "https://example.com");
//! store.delete_by_alias("ex1").await?;
//! # let _ = id;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! The `url-store` binary reads its settings from environment variables via
//! [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;
pub mod utils;

pub use application::services::UrlService;
pub use domain::entities::Record;
pub use domain::repositories::UrlRepository;
pub use error::StoreError;
pub use infrastructure::persistence::{SqliteUrlRepository, StoreOptions};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::domain::entities::Record;
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::StoreError;
    pub use crate::infrastructure::persistence::{SqliteUrlRepository, StoreOptions};
}
