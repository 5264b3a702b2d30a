//! Thread model for anonboard.
//!
//! This module defines the Thread struct, the top-level post of a board.

use chrono::{DateTime, Utc};

use super::reply::Reply;

/// Thread entity: a top-level post that carries its replies.
#[derive(Debug, Clone)]
pub struct Thread {
    /// Unique thread ID.
    pub id: String,
    /// Thread body.
    pub text: String,
    /// Thread creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Last bump timestamp (creation or newest reply).
    pub bumped_on: DateTime<Utc>,
    /// Whether the thread has been reported.
    pub reported: bool,
    /// Argon2 hash of the delete password.
    pub delete_password: String,
    replies: Vec<Reply>,
}

impl Thread {
    /// Create a thread with no replies, bumped at its creation time.
    pub(crate) fn new(
        text: impl Into<String>,
        delete_password_hash: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: super::generate_id(),
            text: text.into(),
            created_on: now,
            bumped_on: now,
            reported: false,
            delete_password: delete_password_hash,
            replies: Vec::new(),
        }
    }

    /// All replies in the order they were posted.
    pub fn replies(&self) -> &[Reply] {
        &self.replies
    }

    /// Number of replies, soft-deleted ones included.
    pub fn replycount(&self) -> usize {
        self.replies.len()
    }

    /// The `limit` most recent replies, newest first.
    ///
    /// Replies sharing a timestamp keep newest-posted-first order.
    pub fn recent_replies(&self, limit: usize) -> Vec<&Reply> {
        let mut recent: Vec<&Reply> = self.replies.iter().rev().collect();
        recent.sort_by(|a, b| b.created_on.cmp(&a.created_on));
        recent.truncate(limit);
        recent
    }

    /// Find a reply by ID.
    pub fn reply(&self, reply_id: &str) -> Option<&Reply> {
        self.replies.iter().find(|r| r.id == reply_id)
    }

    pub(crate) fn reply_mut(&mut self, reply_id: &str) -> Option<&mut Reply> {
        self.replies.iter_mut().find(|r| r.id == reply_id)
    }

    /// Append a reply and bump the thread. `bumped_on` never moves backwards.
    pub(crate) fn push_reply(&mut self, reply: Reply) -> &Reply {
        self.bumped_on = self.bumped_on.max(reply.created_on);
        self.replies.push(reply);
        &self.replies[self.replies.len() - 1]
    }
}

/// Data for inserting a thread. The delete password is already hashed.
#[derive(Debug, Clone)]
pub struct NewThread {
    /// Thread body.
    pub text: String,
    /// Argon2 hash of the delete password.
    pub delete_password_hash: String,
}

impl NewThread {
    pub fn new(text: impl Into<String>, delete_password_hash: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            delete_password_hash: delete_password_hash.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn thread_at(now: DateTime<Utc>) -> Thread {
        Thread::new("Test Thread", "hash".to_string(), now)
    }

    #[test]
    fn test_new_thread() {
        let now = Utc::now();
        let thread = thread_at(now);
        assert_eq!(thread.text, "Test Thread");
        assert_eq!(thread.created_on, now);
        assert_eq!(thread.bumped_on, now);
        assert!(!thread.reported);
        assert!(thread.replies().is_empty());
        assert_eq!(thread.replycount(), 0);
        assert!(!thread.id.is_empty());
    }

    #[test]
    fn test_thread_ids_are_unique() {
        let now = Utc::now();
        assert_ne!(thread_at(now).id, thread_at(now).id);
    }

    #[test]
    fn test_push_reply_bumps_and_counts() {
        let start = Utc::now();
        let mut thread = thread_at(start);
        let later = start + Duration::seconds(5);

        thread.push_reply(Reply::new("first", "hash".to_string(), later));

        assert_eq!(thread.replycount(), 1);
        assert_eq!(thread.bumped_on, later);
    }

    #[test]
    fn test_push_reply_never_moves_bump_backwards() {
        let start = Utc::now();
        let mut thread = thread_at(start);

        thread.push_reply(Reply::new("old clock", "hash".to_string(), start - Duration::seconds(5)));

        assert_eq!(thread.bumped_on, start);
    }

    #[test]
    fn test_recent_replies_newest_first_and_limited() {
        let start = Utc::now();
        let mut thread = thread_at(start);
        for i in 0..5 {
            thread.push_reply(Reply::new(
                format!("reply {i}"),
                "hash".to_string(),
                start + Duration::seconds(i),
            ));
        }

        let recent = thread.recent_replies(3);
        let texts: Vec<&str> = recent.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["reply 4", "reply 3", "reply 2"]);
        assert_eq!(thread.replycount(), 5);
    }

    #[test]
    fn test_recent_replies_ties_prefer_latest_posted() {
        let now = Utc::now();
        let mut thread = thread_at(now);
        thread.push_reply(Reply::new("a", "hash".to_string(), now));
        thread.push_reply(Reply::new("b", "hash".to_string(), now));

        let recent = thread.recent_replies(1);
        assert_eq!(recent[0].text, "b");
    }

    #[test]
    fn test_find_reply() {
        let now = Utc::now();
        let mut thread = thread_at(now);
        let id = thread.push_reply(Reply::new("x", "hash".to_string(), now)).id.clone();

        assert!(thread.reply(&id).is_some());
        assert!(thread.reply("missing").is_none());
    }
}
