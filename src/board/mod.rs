//! Board module for anonboard.
//!
//! This module provides the anonymous message board core:
//! - Threads and replies with their delete-password hashes
//! - The in-memory `BoardStore` holding every board
//! - Bump ordering, reporting, and soft deletion of replies
//! - `BoardService`, which hashes and checks delete passwords off-lock

mod reply;
mod service;
mod store;
mod thread;

use std::sync::Arc;

use tokio::sync::Mutex;

pub use reply::{NewReply, Reply, DELETED_TEXT};
pub use service::{BoardService, ReplyDeletion, ThreadDeletion};
pub use store::{BoardStore, REPLY_PREVIEW_LIMIT, THREAD_LIST_LIMIT};
pub use thread::{NewThread, Thread};

/// Board store shared between request handlers.
pub type SharedStore = Arc<Mutex<BoardStore>>;

/// Generate a unique thread or reply ID.
pub(crate) fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
