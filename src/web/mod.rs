//! Web API module for anonboard.
//!
//! This module provides the REST API for boards, threads, and replies
//! under `/api`, plus a health check and optional static front-end.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
