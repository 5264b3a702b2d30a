//! Reply model for anonboard.

use chrono::{DateTime, Utc};

/// Text a reply carries after it has been soft-deleted.
pub const DELETED_TEXT: &str = "[deleted]";

/// Reply entity. Replies are never removed, only soft-deleted.
#[derive(Debug, Clone)]
pub struct Reply {
    /// Unique reply ID.
    pub id: String,
    /// Reply body, or [`DELETED_TEXT`] once deleted.
    pub text: String,
    /// Reply creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Argon2 hash of the delete password.
    pub delete_password: String,
    /// Whether the reply has been reported.
    pub reported: bool,
}

impl Reply {
    pub(crate) fn new(
        text: impl Into<String>,
        delete_password_hash: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: super::generate_id(),
            text: text.into(),
            created_on: now,
            delete_password: delete_password_hash,
            reported: false,
        }
    }

    /// Overwrite the body with the deletion sentinel.
    pub(crate) fn soft_delete(&mut self) {
        self.text = DELETED_TEXT.to_string();
    }
}

/// Data for appending a reply. The delete password is already hashed.
#[derive(Debug, Clone)]
pub struct NewReply {
    /// ID of the thread to reply to.
    pub thread_id: String,
    /// Reply body.
    pub text: String,
    /// Argon2 hash of the delete password.
    pub delete_password_hash: String,
}

impl NewReply {
    pub fn new(
        thread_id: impl Into<String>,
        text: impl Into<String>,
        delete_password_hash: impl Into<String>,
    ) -> Self {
        Self {
            thread_id: thread_id.into(),
            text: text.into(),
            delete_password_hash: delete_password_hash.into(),
        }
    }
}
