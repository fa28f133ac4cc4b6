//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::domain::entities::Record;
use crate::domain::repositories::UrlRepository;
use crate::error::StoreError;
use crate::infrastructure::persistence::schema::init_statements;
use crate::utils::db_error::{is_check_violation, is_unique_violation};

const OP_OPEN: &str = "storage.sqlite.open";
const OP_SAVE: &str = "storage.sqlite.save";
const OP_GET: &str = "storage.sqlite.get_by_alias";
const OP_DELETE: &str = "storage.sqlite.delete_by_alias";
const OP_LIST: &str = "storage.sqlite.list_all";

/// Connection settings applied when opening the store.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Maximum number of pooled connections. Ignored for in-memory databases,
    /// which always use exactly one.
    pub max_connections: u32,
    /// How long a statement waits on a locked database before failing.
    pub busy_timeout: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            max_connections: 5,
            busy_timeout: Duration::from_secs(5),
        }
    }
}

/// SQLite store for alias to URL mappings.
///
/// A value of this type always has its schema in place: the only way to get
/// one is [`SqliteUrlRepository::open`] / [`SqliteUrlRepository::open_with`].
/// Clones share the same pool.
#[derive(Debug, Clone)]
pub struct SqliteUrlRepository {
    pool: SqlitePool,
}

impl SqliteUrlRepository {
    /// Opens (creating if missing) the database at `location` with default options.
    ///
    /// `location` may be a file path, `:memory:`, or a `sqlite:` URL.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Initialization`] if the database cannot be opened
    /// or the schema cannot be created.
    pub async fn open(location: &str) -> Result<Self, StoreError> {
        Self::open_with(location, &StoreOptions::default()).await
    }

    /// Opens the database at `location` and ensures the schema exists.
    ///
    /// Safe to call repeatedly against the same location; existing records
    /// are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Initialization`] on any failure.
    pub async fn open_with(location: &str, options: &StoreOptions) -> Result<Self, StoreError> {
        let init_err = |source| StoreError::Initialization { op: OP_OPEN, source };

        let in_memory = is_in_memory(location);
        let connect_opts = connect_options(location, in_memory)
            .map_err(init_err)?
            .create_if_missing(true)
            .busy_timeout(options.busy_timeout);

        let pool_opts = if in_memory {
            // Every connection to `:memory:` is a separate database; keep one alive forever.
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(options.max_connections.max(1))
        };

        let pool = pool_opts
            .connect_with(connect_opts)
            .await
            .map_err(init_err)?;

        let repo = Self { pool };
        repo.init_schema().await.map_err(init_err)?;

        tracing::info!(location = %location, in_memory, "URL store ready");
        Ok(repo)
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes all pooled connections. Later operations fail with
    /// [`StoreError::Storage`].
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::debug!("URL store closed");
    }

    async fn init_schema(&self) -> Result<(), sqlx::Error> {
        for stmt in init_statements() {
            sqlx::query(stmt).execute(&self.pool).await?;
        }
        Ok(())
    }
}

fn is_in_memory(location: &str) -> bool {
    location == ":memory:"
        || location.starts_with("sqlite::memory:")
        || location.starts_with("sqlite://:memory:")
        || location.contains("mode=memory")
}

fn connect_options(location: &str, in_memory: bool) -> Result<SqliteConnectOptions, sqlx::Error> {
    if location.starts_with("sqlite:") {
        let opts = SqliteConnectOptions::from_str(location)?;
        return Ok(if in_memory {
            opts
        } else {
            opts.journal_mode(SqliteJournalMode::Wal)
        });
    }

    if in_memory {
        return SqliteConnectOptions::from_str("sqlite::memory:");
    }

    Ok(SqliteConnectOptions::new()
        .filename(location)
        .journal_mode(SqliteJournalMode::Wal))
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn save(&self, url: &str, alias: &str) -> Result<i64, StoreError> {
        let result = sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
            .bind(url)
            .bind(alias)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(e) if is_unique_violation(&e) => Err(StoreError::alias_exists(OP_SAVE, alias)),
            Err(e) if is_check_violation(&e) => Err(StoreError::invalid_input(
                OP_SAVE,
                "alias and url must not be empty",
            )),
            Err(e) => Err(StoreError::storage(OP_SAVE, e)),
        }
    }

    async fn get_by_alias(&self, alias: &str) -> Result<String, StoreError> {
        let url: Option<String> = sqlx::query_scalar("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::storage(OP_GET, e))?;

        url.ok_or_else(|| StoreError::not_found(OP_GET, alias))
    }

    async fn delete_by_alias(&self, alias: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::storage(OP_DELETE, e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(OP_DELETE, alias));
        }

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Record>, StoreError> {
        sqlx::query_as::<_, Record>("SELECT id, alias, url FROM url")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::storage(OP_LIST, e))
    }
}
