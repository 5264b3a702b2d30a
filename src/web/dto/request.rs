//! Request DTOs for the board API.
//!
//! Bodies arrive as HTML form posts or JSON. Fields of the report and delete
//! requests default to empty strings, so a missing field simply matches
//! nothing.

use serde::Deserialize;
use validator::Validate;

/// POST /api/threads/:board
#[derive(Debug, Deserialize, Validate)]
pub struct CreateThreadRequest {
    /// Thread body.
    #[serde(default)]
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
    /// Password needed to delete the thread.
    #[serde(default)]
    #[validate(length(min = 1, message = "delete_password is required"))]
    pub delete_password: String,
}

/// PUT /api/threads/:board
#[derive(Debug, Deserialize)]
pub struct ReportThreadRequest {
    /// Thread to report. `report_id` is the older name of this field.
    #[serde(default, alias = "report_id")]
    pub thread_id: String,
}

/// DELETE /api/threads/:board
#[derive(Debug, Deserialize)]
pub struct DeleteThreadRequest {
    /// Thread to delete.
    #[serde(default)]
    pub thread_id: String,
    /// Password given when the thread was created.
    #[serde(default)]
    pub delete_password: String,
}

/// GET /api/replies/:board query string.
#[derive(Debug, Deserialize)]
pub struct ThreadQuery {
    /// Thread to fetch.
    #[serde(default)]
    pub thread_id: Option<String>,
}

/// POST /api/replies/:board
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReplyRequest {
    /// Thread to reply to.
    #[serde(default)]
    #[validate(length(min = 1, message = "thread_id is required"))]
    pub thread_id: String,
    /// Reply body.
    #[serde(default)]
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
    /// Password needed to delete the reply.
    #[serde(default)]
    #[validate(length(min = 1, message = "delete_password is required"))]
    pub delete_password: String,
}

/// PUT /api/replies/:board
#[derive(Debug, Deserialize)]
pub struct ReportReplyRequest {
    /// Thread holding the reply.
    #[serde(default)]
    pub thread_id: String,
    /// Reply to report.
    #[serde(default)]
    pub reply_id: String,
}

/// DELETE /api/replies/:board
#[derive(Debug, Deserialize)]
pub struct DeleteReplyRequest {
    /// Thread holding the reply.
    #[serde(default)]
    pub thread_id: String,
    /// Reply to delete.
    #[serde(default)]
    pub reply_id: String,
    /// Password given when the reply was created.
    #[serde(default)]
    pub delete_password: String,
}
