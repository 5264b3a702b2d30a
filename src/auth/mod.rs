//! Authentication module for anonboard.
//!
//! Boards are anonymous; the only credential is the per-post delete password.

mod password;

pub use password::{
    check_password_config, hash_password, password_matches, verify_password, PasswordError,
};
