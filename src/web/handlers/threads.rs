//! Thread handlers for the board API.

use axum::{
    extract::{Path, State},
    response::Redirect,
    Json,
};
use std::sync::Arc;

use crate::board::ThreadDeletion;
use crate::web::dto::{
    CreateThreadRequest, DeleteThreadRequest, FormOrJson, ReportThreadRequest, ThreadResponse,
    ValidatedFormOrJson, INCORRECT_PASSWORD, REPORTED, SUCCESS, THREAD_NOT_FOUND,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// GET /api/threads/:board - List the most recently bumped threads.
pub async fn list_threads(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
) -> Json<Vec<ThreadResponse>> {
    let mut store = state.board.store().lock().await;
    let threads = store
        .list_threads(&board)
        .into_iter()
        .map(ThreadResponse::preview)
        .collect();
    Json(threads)
}

/// POST /api/threads/:board - Create a new thread.
pub async fn create_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedFormOrJson(req): ValidatedFormOrJson<CreateThreadRequest>,
) -> Result<Redirect, ApiError> {
    let thread_id = state
        .board
        .create_thread(&board, req.text, req.delete_password)
        .await?;
    tracing::info!(board = %board, thread_id = %thread_id, "Thread created");

    Ok(Redirect::to(&format!("/b/{}/", urlencoding::encode(&board))))
}

/// PUT /api/threads/:board - Report a thread.
///
/// Always answers `reported` so the response does not reveal whether the
/// thread exists.
pub async fn report_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    FormOrJson(req): FormOrJson<ReportThreadRequest>,
) -> &'static str {
    let found = state
        .board
        .store()
        .lock()
        .await
        .report_thread(&board, &req.thread_id);

    if found {
        tracing::info!(board = %board, thread_id = %req.thread_id, "Thread reported");
    } else {
        tracing::debug!(board = %board, thread_id = %req.thread_id, "Report for unknown thread");
    }

    REPORTED
}

/// DELETE /api/threads/:board - Delete a thread with its password.
pub async fn delete_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    FormOrJson(req): FormOrJson<DeleteThreadRequest>,
) -> Result<&'static str, ApiError> {
    let outcome = state
        .board
        .delete_thread(&board, &req.thread_id, &req.delete_password)
        .await?;

    let body = match outcome {
        ThreadDeletion::Deleted => {
            tracing::info!(board = %board, thread_id = %req.thread_id, "Thread deleted");
            SUCCESS
        }
        ThreadDeletion::IncorrectPassword => {
            tracing::debug!(board = %board, thread_id = %req.thread_id, "Thread delete refused");
            INCORRECT_PASSWORD
        }
        ThreadDeletion::NotFound => {
            tracing::debug!(board = %board, thread_id = %req.thread_id, "Delete for unknown thread");
            THREAD_NOT_FOUND
        }
    };

    Ok(body)
}
