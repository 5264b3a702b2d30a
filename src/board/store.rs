//! In-memory board store for anonboard.
//!
//! Boards map to an ordered list of threads. The list is kept most recently
//! bumped first, so listing is a stable sort over an already ordered list.
//!
//! The store never hashes or verifies passwords. That work happens in
//! [`BoardService`](super::BoardService) without the store lock held.

use std::collections::HashMap;

use chrono::Utc;

use crate::{BoardError, Result};

use super::reply::{NewReply, Reply};
use super::thread::{NewThread, Thread};

/// Maximum number of threads returned when listing a board.
pub const THREAD_LIST_LIMIT: usize = 10;

/// Maximum number of replies shown per thread when listing a board.
pub const REPLY_PREVIEW_LIMIT: usize = 3;

/// Process-local store of boards, threads, and replies.
///
/// Boards are created implicitly the first time any operation names them.
#[derive(Debug, Default)]
pub struct BoardStore {
    boards: HashMap<String, Vec<Thread>>,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn board_mut(&mut self, board: &str) -> &mut Vec<Thread> {
        self.boards.entry(board.to_string()).or_default()
    }

    fn thread_mut(&mut self, board: &str, thread_id: &str) -> Option<&mut Thread> {
        self.board_mut(board).iter_mut().find(|t| t.id == thread_id)
    }

    /// List up to [`THREAD_LIST_LIMIT`] threads, most recently bumped first.
    pub fn list_threads(&mut self, board: &str) -> Vec<&Thread> {
        let threads: &Vec<Thread> = self.board_mut(board);
        let mut listed: Vec<&Thread> = threads.iter().collect();
        listed.sort_by(|a, b| b.bumped_on.cmp(&a.bumped_on));
        listed.truncate(THREAD_LIST_LIMIT);
        listed
    }

    /// Create a thread at the top of the board.
    pub fn create_thread(&mut self, board: &str, new_thread: NewThread) -> &Thread {
        let thread = Thread::new(new_thread.text, new_thread.delete_password_hash, Utc::now());

        let threads = self.board_mut(board);
        threads.insert(0, thread);
        &threads[0]
    }

    /// Flag a thread as reported.
    ///
    /// Returns whether the thread exists. Reporting twice is harmless.
    pub fn report_thread(&mut self, board: &str, thread_id: &str) -> bool {
        match self.thread_mut(board, thread_id) {
            Some(thread) => {
                thread.reported = true;
                true
            }
            None => false,
        }
    }

    /// Remove a thread and its replies. Returns whether it existed.
    pub fn remove_thread(&mut self, board: &str, thread_id: &str) -> bool {
        let threads = self.board_mut(board);
        match threads.iter().position(|t| t.id == thread_id) {
            Some(index) => {
                threads.remove(index);
                true
            }
            None => false,
        }
    }

    /// Get a thread with all of its replies.
    pub fn get_thread(&mut self, board: &str, thread_id: &str) -> Option<&Thread> {
        self.board_mut(board).iter().find(|t| t.id == thread_id)
    }

    /// Append a reply to a thread and bump the thread to the top.
    ///
    /// Returns `BoardError::NotFound` if the thread does not exist.
    pub fn create_reply(&mut self, board: &str, new_reply: NewReply) -> Result<&Reply> {
        let threads = self.board_mut(board);
        let Some(index) = threads.iter().position(|t| t.id == new_reply.thread_id) else {
            return Err(BoardError::NotFound("thread".to_string()));
        };

        let reply = Reply::new(new_reply.text, new_reply.delete_password_hash, Utc::now());

        let mut thread = threads.remove(index);
        thread.push_reply(reply);
        threads.insert(0, thread);

        let replies = threads[0].replies();
        Ok(&replies[replies.len() - 1])
    }

    /// Flag a reply as reported.
    ///
    /// Returns whether the reply exists. Reporting twice is harmless.
    pub fn report_reply(&mut self, board: &str, thread_id: &str, reply_id: &str) -> bool {
        match self
            .thread_mut(board, thread_id)
            .and_then(|t| t.reply_mut(reply_id))
        {
            Some(reply) => {
                reply.reported = true;
                true
            }
            None => false,
        }
    }

    /// Replace a reply's text with the deletion sentinel.
    ///
    /// Returns whether the reply exists. The reply keeps its place and its
    /// thread's reply count is unchanged.
    pub fn soft_delete_reply(&mut self, board: &str, thread_id: &str, reply_id: &str) -> bool {
        match self
            .thread_mut(board, thread_id)
            .and_then(|t| t.reply_mut(reply_id))
        {
            Some(reply) => {
                reply.soft_delete();
                true
            }
            None => false,
        }
    }
}
