//! anonboard - anonymous message board backend.
//!
//! Boards hold threads, threads hold replies, and every post can be
//! reported by anyone or deleted by whoever knows its delete password.

pub mod auth;
pub mod board;
pub mod config;
pub mod error;
pub mod logging;
pub mod web;

pub use board::{BoardStore, SharedStore};
pub use config::Config;
pub use error::{BoardError, Result};
pub use web::WebServer;
