mod common;

use std::sync::Arc;
use url_store::application::services::UrlService;
use url_store::error::StoreError;
use url_store::infrastructure::persistence::SqliteUrlRepository;

#[tokio::test]
async fn test_service_round_trip_on_sqlite() {
    let store = common::open_test_store().await;
    let service = UrlService::new(Arc::new(store.repo.clone()));

    let id = service.save("https://example.com", "ex1").await.unwrap();
    assert_eq!(id, 1);
    assert_eq!(service.get("ex1").await.unwrap(), "https://example.com");

    service.delete("ex1").await.unwrap();

    assert!(service.get("ex1").await.unwrap_err().is_not_found());
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_service_rejects_empty_input_before_storage() {
    let store = common::open_test_store().await;
    let service = UrlService::new(Arc::new(store.repo.clone()));

    let err = service.save("https://example.com", "").await.unwrap_err();

    assert!(matches!(
        err,
        StoreError::InvalidInput { op: "url_service.save", .. }
    ));
    assert_eq!(common::count_rows(&store.repo).await, 0);
}

#[tokio::test]
async fn test_service_over_in_memory_store() {
    let repo = SqliteUrlRepository::open(":memory:").await.unwrap();
    let service = UrlService::new(Arc::new(repo));

    service.save("https://a.example", "a").await.unwrap();
    let err = service.save("https://b.example", "a").await.unwrap_err();

    assert!(err.is_alias_exists());
    assert_eq!(service.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_service_empty_alias_lookup_and_delete_are_not_found() {
    let store = common::open_test_store().await;
    let service = UrlService::new(Arc::new(store.repo.clone()));
    service.save("https://example.com", "keep").await.unwrap();

    let err = service.get("").await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::NotFound { op: "storage.sqlite.get_by_alias", .. }
    ));

    let err = service.delete("").await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::NotFound { op: "storage.sqlite.delete_by_alias", .. }
    ));

    assert_eq!(common::count_rows(&store.repo).await, 1);
}
