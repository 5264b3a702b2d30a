//! Response DTOs for the board API.
//!
//! These are the only shapes that leave the server, so `delete_password`
//! and `reported` have no field here.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::board::{Reply, Thread, REPLY_PREVIEW_LIMIT};

/// Plain-text body for report requests.
pub const REPORTED: &str = "reported";
/// Plain-text body for a successful delete.
pub const SUCCESS: &str = "success";
/// Plain-text body for a failed delete.
pub const INCORRECT_PASSWORD: &str = "incorrect password";
/// Plain-text body when the target thread does not exist.
pub const THREAD_NOT_FOUND: &str = "thread not found";

/// Reply as exposed by the API.
#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    /// Reply ID.
    #[serde(rename = "_id")]
    pub id: String,
    /// Reply body.
    pub text: String,
    /// Creation time.
    pub created_on: DateTime<Utc>,
}

impl From<&Reply> for ReplyResponse {
    fn from(reply: &Reply) -> Self {
        Self {
            id: reply.id.clone(),
            text: reply.text.clone(),
            created_on: reply.created_on,
        }
    }
}

/// Thread as exposed by the API.
#[derive(Debug, Serialize)]
pub struct ThreadResponse {
    /// Thread ID.
    #[serde(rename = "_id")]
    pub id: String,
    /// Thread body.
    pub text: String,
    /// Creation time.
    pub created_on: DateTime<Utc>,
    /// Last bump time.
    pub bumped_on: DateTime<Utc>,
    /// Replies included in this response.
    pub replies: Vec<ReplyResponse>,
    /// Total number of replies, whatever `replies` holds.
    pub replycount: usize,
}

impl ThreadResponse {
    fn with_replies(thread: &Thread, replies: Vec<ReplyResponse>) -> Self {
        Self {
            id: thread.id.clone(),
            text: thread.text.clone(),
            created_on: thread.created_on,
            bumped_on: thread.bumped_on,
            replies,
            replycount: thread.replycount(),
        }
    }

    /// Board listing form: the most recent replies only, newest first.
    pub fn preview(thread: &Thread) -> Self {
        let replies = thread
            .recent_replies(REPLY_PREVIEW_LIMIT)
            .into_iter()
            .map(ReplyResponse::from)
            .collect();
        Self::with_replies(thread, replies)
    }

    /// Thread page form: every reply in posting order.
    pub fn full(thread: &Thread) -> Self {
        let replies = thread.replies().iter().map(ReplyResponse::from).collect();
        Self::with_replies(thread, replies)
    }
}

/// GET /api/replies/:board response.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ThreadDetailResponse {
    /// The requested thread with all replies.
    Found(ThreadResponse),
    /// Unknown thread: an object with no replies.
    Missing {
        /// Always empty.
        replies: Vec<ReplyResponse>,
    },
}

impl ThreadDetailResponse {
    /// Response for a thread that does not exist.
    pub fn missing() -> Self {
        ThreadDetailResponse::Missing {
            replies: Vec::new(),
        }
    }
}
