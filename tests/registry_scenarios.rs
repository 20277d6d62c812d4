use link_registry::application::services::LinkService;
use link_registry::error::AppError;
use link_registry::infrastructure::persistence::MemoryLinkRepository;
use std::collections::HashSet;
use std::sync::Arc;

fn service() -> Arc<LinkService<MemoryLinkRepository>> {
    Arc::new(LinkService::new(Arc::new(MemoryLinkRepository::new())))
}

#[tokio::test]
async fn test_full_lifecycle() {
    let service = service();

    let a = service.create("https://example.com").await.unwrap();
    assert!(a.created);
    assert_eq!(a.link.clicks, 0);

    let again = service.create("https://example.com").await.unwrap();
    assert!(!again.created);
    assert_eq!(again.link.short_code, a.link.short_code);

    for _ in 0..3 {
        service
            .resolve_and_increment(&a.link.short_code)
            .await
            .unwrap();
    }

    let links = service.list().await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].id, a.link.id);
    assert_eq!(links[0].clicks, 3);

    service.delete(a.link.id).await.unwrap();
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_resolve_returns_post_increment_value() {
    let service = service();
    let created = service.create("https://example.com").await.unwrap();

    let first = service
        .resolve_and_increment(&created.link.short_code)
        .await
        .unwrap();
    let second = service
        .resolve_and_increment(&created.link.short_code)
        .await
        .unwrap();

    assert_eq!(first.clicks, 1);
    assert_eq!(second.clicks, 2);
}

#[tokio::test]
async fn test_resolve_unknown_code_mutates_nothing() {
    let service = service();
    service.create("https://example.com").await.unwrap();

    let result = service.resolve_and_increment("000000").await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
    assert_eq!(service.list().await.unwrap()[0].clicks, 0);
}

#[tokio::test]
async fn test_codes_unique_across_many_links() {
    let service = service();

    for i in 0..500 {
        service
            .create(&format!("https://example.com/{i}"))
            .await
            .unwrap();
    }

    let links = service.list().await.unwrap();
    let codes: HashSet<&str> = links.iter().map(|l| l.short_code.as_str()).collect();

    assert_eq!(links.len(), 500);
    assert_eq!(codes.len(), 500);
    assert!(links.iter().all(|l| l.short_code.len() == 6));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_redirects_do_not_lose_clicks() {
    let service = service();
    let code = service
        .create("https://example.com")
        .await
        .unwrap()
        .link
        .short_code;

    let handles: Vec<_> = (0..200)
        .map(|_| {
            let service = service.clone();
            let code = code.clone();
            tokio::spawn(async move { service.resolve_and_increment(&code).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(service.get_by_code(&code).await.unwrap().clicks, 200);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_creates_of_same_url_yield_one_link() {
    let service = service();

    let handles: Vec<_> = (0..50)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.create("https://race.example.com").await })
        })
        .collect();

    let mut created = 0;
    let mut codes = HashSet::new();
    for handle in handles {
        let outcome = handle.await.unwrap().unwrap();
        if outcome.created {
            created += 1;
        }
        codes.insert(outcome.link.short_code);
    }

    assert_eq!(created, 1);
    assert_eq!(codes.len(), 1);
    assert_eq!(service.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let service = service();
    let created = service.create("https://example.com").await.unwrap();

    service.delete(created.link.id).await.unwrap();
    service.delete(created.link.id).await.unwrap();
    service.delete(-1).await.unwrap();

    assert!(service.list().await.unwrap().is_empty());
}
