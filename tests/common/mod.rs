#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;
use url_store::infrastructure::persistence::SqliteUrlRepository;

/// A store backed by a file in a temporary directory. The directory (and the
/// database) is removed when the value is dropped.
pub struct TestStore {
    pub dir: TempDir,
    pub repo: SqliteUrlRepository,
}

impl TestStore {
    pub fn path(&self) -> PathBuf {
        self.dir.path().join("test.db")
    }

    pub fn location(&self) -> String {
        self.path().to_string_lossy().into_owned()
    }
}

pub async fn open_test_store() -> TestStore {
    let dir = tempfile::tempdir().unwrap();
    let location = dir.path().join("test.db").to_string_lossy().into_owned();
    let repo = SqliteUrlRepository::open(&location).await.unwrap();

    TestStore { dir, repo }
}

pub async fn count_rows(repo: &SqliteUrlRepository) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(repo.pool())
        .await
        .unwrap()
}
