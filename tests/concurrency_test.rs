//! Concurrency tests for anonboard.
//!
//! Handlers share one store behind a mutex, and password hashing runs
//! outside it. These tests hammer the service from many tasks and check
//! that no reply or thread is lost.

use std::sync::Arc;

use tokio::sync::Mutex;

use anonboard::board::{BoardService, BoardStore, ReplyDeletion, ThreadDeletion, DELETED_TEXT};
use anonboard::config::PasswordConfig;
use anonboard::BoardError;

fn setup_service() -> BoardService {
    let store = Arc::new(Mutex::new(BoardStore::new()));
    BoardService::new(store, PasswordConfig::minimal())
}

async fn create_thread(service: &BoardService, text: &str) -> String {
    service
        .create_thread("test", text.to_string(), "password123".to_string())
        .await
        .unwrap()
}

/// Replies posted from many tasks all land on the thread.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_reply_creation() {
    let service = setup_service();
    let thread_id = create_thread(&service, "busy thread").await;

    let mut handles = Vec::new();
    for i in 0..20 {
        let service = service.clone();
        let thread_id = thread_id.clone();
        handles.push(tokio::spawn(async move {
            service
                .create_reply(
                    "test",
                    &thread_id,
                    format!("reply {}", i),
                    "password123".to_string(),
                )
                .await
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap());
    }

    let mut store = service.store().lock().await;
    let thread = store.get_thread("test", &thread_id).unwrap();
    assert_eq!(thread.replycount(), 20);
    for id in &ids {
        assert!(thread.reply(id).is_some());
    }

    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}

/// Threads created concurrently on different boards stay on their board.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_thread_creation_across_boards() {
    let service = setup_service();

    let mut handles = Vec::new();
    for i in 0..16 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            let board = if i % 2 == 0 { "even" } else { "odd" };
            service
                .create_thread(board, format!("thread {}", i), "pw".to_string())
                .await
        }));
    }

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let mut store = service.store().lock().await;
    assert_eq!(store.list_threads("even").len(), 8);
    assert_eq!(store.list_threads("odd").len(), 8);
}

/// A thread deleted while replies race in leaves no orphaned replies behind.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_reply_racing_thread_delete() {
    let service = setup_service();
    let thread_id = create_thread(&service, "doomed").await;

    let replier = {
        let service = service.clone();
        let thread_id = thread_id.clone();
        tokio::spawn(async move {
            let mut outcomes = Vec::new();
            for i in 0..10 {
                let result = service
                    .create_reply("test", &thread_id, format!("reply {}", i), "pw".to_string())
                    .await;
                match result {
                    Ok(_) => outcomes.push(true),
                    Err(BoardError::NotFound(_)) => outcomes.push(false),
                    Err(e) => panic!("unexpected error: {e}"),
                }
            }
            outcomes
        })
    };

    let deleter = {
        let service = service.clone();
        let thread_id = thread_id.clone();
        tokio::spawn(async move {
            service
                .delete_thread("test", &thread_id, "password123")
                .await
        })
    };

    let outcomes = replier.await.unwrap();
    assert_eq!(deleter.await.unwrap().unwrap(), ThreadDeletion::Deleted);

    // Once a reply fails the thread is gone for good.
    let first_failure = outcomes.iter().position(|ok| !ok).unwrap_or(outcomes.len());
    assert!(outcomes[first_failure..].iter().all(|ok| !ok));

    let mut store = service.store().lock().await;
    assert!(store.get_thread("test", &thread_id).is_none());
    assert!(store.list_threads("test").is_empty());
}

/// Two deletes of the same reply both see the password match, and the reply
/// ends up soft-deleted exactly once.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_reply_deletes() {
    let service = setup_service();
    let thread_id = create_thread(&service, "thread").await;
    let reply_id = service
        .create_reply("test", &thread_id, "reply".to_string(), "reply123".to_string())
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..2 {
        let service = service.clone();
        let thread_id = thread_id.clone();
        let reply_id = reply_id.clone();
        handles.push(tokio::spawn(async move {
            service
                .delete_reply("test", &thread_id, &reply_id, "reply123")
                .await
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), ReplyDeletion::Deleted);
    }

    let mut store = service.store().lock().await;
    let thread = store.get_thread("test", &thread_id).unwrap();
    assert_eq!(thread.replycount(), 1);
    assert_eq!(thread.reply(&reply_id).unwrap().text, DELETED_TEXT);
}
