//! Record entity representing one alias to URL mapping.

use serde::Serialize;

/// A stored alias to URL mapping.
///
/// `id` is assigned by the store on insert and never reused. Lookups always go
/// through `alias`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, sqlx::FromRow)]
pub struct Record {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl Record {
    /// Creates a new Record instance.
    pub fn new(id: i64, alias: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            alias: alias.into(),
            url: url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = Record::new(1, "ex1", "https://example.com");

        assert_eq!(record.id, 1);
        assert_eq!(record.alias, "ex1");
        assert_eq!(record.url, "https://example.com");
    }

    #[test]
    fn test_record_serializes_all_fields() {
        let record = Record::new(7, "docs", "https://docs.rs");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "id": 7, "alias": "docs", "url": "https://docs.rs" })
        );
    }
}
