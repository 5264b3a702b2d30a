//! API handlers for the board routes.

pub mod replies;
pub mod state;
pub mod threads;

pub use replies::*;
pub use state::AppState;
pub use threads::*;
