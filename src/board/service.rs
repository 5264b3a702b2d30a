//! Board service for anonboard.
//!
//! Writes that involve a delete password go through here. Argon2 hashing and
//! verification run on the blocking thread pool with the store unlocked, so
//! one slow hash never stalls requests on other boards.

use tokio::task;

use crate::auth::{hash_password, password_matches, PasswordError};
use crate::config::PasswordConfig;
use crate::{BoardError, Result};

use super::reply::NewReply;
use super::thread::NewThread;
use super::SharedStore;

/// Outcome of a thread deletion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadDeletion {
    /// Password matched and the thread was removed.
    Deleted,
    /// The thread exists but the password did not match.
    IncorrectPassword,
    /// No thread with that ID on the board.
    NotFound,
}

/// Outcome of a reply deletion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyDeletion {
    /// Password matched and the reply text was replaced.
    Deleted,
    /// The reply exists but the password did not match.
    IncorrectPassword,
    /// No thread with that ID on the board.
    ThreadNotFound,
    /// The thread exists but has no reply with that ID.
    ReplyNotFound,
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(BoardError::Validation(format!("{field} is required")));
    }
    Ok(())
}

async fn hash_off_lock(password: String, config: PasswordConfig) -> Result<String> {
    let hash = task::spawn_blocking(move || hash_password(&password, &config))
        .await
        .map_err(|e| PasswordError::HashError(e.to_string()))??;
    Ok(hash)
}

async fn verify_off_lock(password: String, hash: String) -> Result<bool> {
    let matches = task::spawn_blocking(move || password_matches(&password, &hash))
        .await
        .map_err(|e| PasswordError::HashError(e.to_string()))??;
    Ok(matches)
}

/// Service for board writes that need a delete password.
///
/// Each method locks the store only for the lookup and the final mutation.
/// Entities are found again by ID after the password work, since another
/// request may have changed the board in between.
#[derive(Clone)]
pub struct BoardService {
    store: SharedStore,
    passwords: PasswordConfig,
}

impl BoardService {
    /// Create a new BoardService over a shared store.
    pub fn new(store: SharedStore, passwords: PasswordConfig) -> Self {
        Self { store, passwords }
    }

    /// The underlying store, for reads and reports.
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Create a thread and return its ID.
    pub async fn create_thread(
        &self,
        board: &str,
        text: String,
        password: String,
    ) -> Result<String> {
        require("text", &text)?;
        require("delete_password", &password)?;

        let hash = hash_off_lock(password, self.passwords).await?;

        let mut store = self.store.lock().await;
        Ok(store.create_thread(board, NewThread::new(text, hash)).id.clone())
    }

    /// Reply to a thread and return the reply ID.
    ///
    /// Returns `BoardError::NotFound` if the thread does not exist, either
    /// before hashing or once the hash is ready.
    pub async fn create_reply(
        &self,
        board: &str,
        thread_id: &str,
        text: String,
        password: String,
    ) -> Result<String> {
        require("thread_id", thread_id)?;
        require("text", &text)?;
        require("delete_password", &password)?;

        if self.store.lock().await.get_thread(board, thread_id).is_none() {
            return Err(BoardError::NotFound("thread".to_string()));
        }

        let hash = hash_off_lock(password, self.passwords).await?;

        let mut store = self.store.lock().await;
        let reply = store.create_reply(board, NewReply::new(thread_id, text, hash))?;
        Ok(reply.id.clone())
    }

    /// Remove a thread if the delete password matches.
    pub async fn delete_thread(
        &self,
        board: &str,
        thread_id: &str,
        password: &str,
    ) -> Result<ThreadDeletion> {
        let hash = {
            let mut store = self.store.lock().await;
            match store.get_thread(board, thread_id) {
                Some(thread) => thread.delete_password.clone(),
                None => return Ok(ThreadDeletion::NotFound),
            }
        };

        if !verify_off_lock(password.to_string(), hash).await? {
            return Ok(ThreadDeletion::IncorrectPassword);
        }

        if self.store.lock().await.remove_thread(board, thread_id) {
            Ok(ThreadDeletion::Deleted)
        } else {
            Ok(ThreadDeletion::NotFound)
        }
    }

    /// Soft-delete a reply if the delete password matches.
    pub async fn delete_reply(
        &self,
        board: &str,
        thread_id: &str,
        reply_id: &str,
        password: &str,
    ) -> Result<ReplyDeletion> {
        let hash = {
            let mut store = self.store.lock().await;
            let Some(thread) = store.get_thread(board, thread_id) else {
                return Ok(ReplyDeletion::ThreadNotFound);
            };
            match thread.reply(reply_id) {
                Some(reply) => reply.delete_password.clone(),
                None => return Ok(ReplyDeletion::ReplyNotFound),
            }
        };

        if !verify_off_lock(password.to_string(), hash).await? {
            return Ok(ReplyDeletion::IncorrectPassword);
        }

        let mut store = self.store.lock().await;
        if store.soft_delete_reply(board, thread_id, reply_id) {
            Ok(ReplyDeletion::Deleted)
        } else if store.get_thread(board, thread_id).is_none() {
            Ok(ReplyDeletion::ThreadNotFound)
        } else {
            Ok(ReplyDeletion::ReplyNotFound)
        }
    }
}
