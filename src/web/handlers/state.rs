//! Application state for the board API.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::board::{BoardService, BoardStore, SharedStore};
use crate::config::PasswordConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Board service. Reads and reports lock its store directly.
    pub board: BoardService,
}

impl AppState {
    /// Create application state around an existing store.
    pub fn new(store: SharedStore, passwords: PasswordConfig) -> Self {
        Self {
            board: BoardService::new(store, passwords),
        }
    }

    /// Create application state with an empty store.
    pub fn with_password_config(passwords: PasswordConfig) -> Self {
        Self::new(Arc::new(Mutex::new(BoardStore::new())), passwords)
    }
}
