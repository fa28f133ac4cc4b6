//! SQL DDL for the URL table.

/// SQLite schema:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT, so ids are never reused
/// - `alias` UNIQUE and non-empty
/// - `url` non-empty
/// - `idx_alias` is redundant with UNIQUE but kept so lookups stay indexed
///   regardless of how the constraint is implemented
///
/// Every statement is `IF NOT EXISTS`; running the script again is a no-op.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS url (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    alias TEXT NOT NULL UNIQUE CHECK (length(alias) > 0),
    url TEXT NOT NULL CHECK (length(url) > 0)
);

CREATE INDEX IF NOT EXISTS idx_alias ON url(alias);
"#;

/// Splits [`SQLITE_INIT`] into individual statements; `sqlx::query` runs one at a time.
pub fn init_statements() -> impl Iterator<Item = &'static str> {
    SQLITE_INIT
        .split(';')
        .map(str::trim)
        .filter(|stmt| !stmt.is_empty())
}
