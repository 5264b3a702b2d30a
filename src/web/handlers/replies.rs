//! Reply handlers for the board API.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use std::sync::Arc;

use crate::board::ReplyDeletion;
use crate::web::dto::{
    CreateReplyRequest, DeleteReplyRequest, FormOrJson, ReportReplyRequest, ThreadDetailResponse,
    ThreadQuery, ThreadResponse, ValidatedFormOrJson, INCORRECT_PASSWORD, REPORTED, SUCCESS,
    THREAD_NOT_FOUND,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::BoardError;

/// GET /api/replies/:board?thread_id= - Get a thread with all replies.
pub async fn get_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Query(query): Query<ThreadQuery>,
) -> Json<ThreadDetailResponse> {
    let Some(thread_id) = query.thread_id else {
        return Json(ThreadDetailResponse::missing());
    };

    let mut store = state.board.store().lock().await;
    let response = match store.get_thread(&board, &thread_id) {
        Some(thread) => ThreadDetailResponse::Found(ThreadResponse::full(thread)),
        None => ThreadDetailResponse::missing(),
    };
    Json(response)
}

/// POST /api/replies/:board - Reply to a thread and bump it.
pub async fn create_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedFormOrJson(req): ValidatedFormOrJson<CreateReplyRequest>,
) -> Result<Response, ApiError> {
    let thread_id = req.thread_id;
    let created = state
        .board
        .create_reply(&board, &thread_id, req.text, req.delete_password)
        .await;

    match created {
        Ok(reply_id) => {
            tracing::info!(board = %board, thread_id = %thread_id, reply_id = %reply_id, "Reply created");
            let location = format!(
                "/b/{}/{}",
                urlencoding::encode(&board),
                urlencoding::encode(&thread_id)
            );
            Ok(Redirect::to(&location).into_response())
        }
        Err(BoardError::NotFound(_)) => {
            tracing::debug!(board = %board, thread_id = %thread_id, "Reply to unknown thread");
            Ok(THREAD_NOT_FOUND.into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// PUT /api/replies/:board - Report a reply.
///
/// Always answers `reported`, whether or not the reply exists.
pub async fn report_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    FormOrJson(req): FormOrJson<ReportReplyRequest>,
) -> &'static str {
    let found = state
        .board
        .store()
        .lock()
        .await
        .report_reply(&board, &req.thread_id, &req.reply_id);

    if found {
        tracing::info!(board = %board, thread_id = %req.thread_id, reply_id = %req.reply_id, "Reply reported");
    } else {
        tracing::debug!(board = %board, thread_id = %req.thread_id, reply_id = %req.reply_id, "Report for unknown reply");
    }

    REPORTED
}

/// DELETE /api/replies/:board - Soft-delete a reply with its password.
///
/// A missing thread or reply answers `incorrect password`, the same as a
/// wrong password.
pub async fn delete_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    FormOrJson(req): FormOrJson<DeleteReplyRequest>,
) -> Result<&'static str, ApiError> {
    let outcome = state
        .board
        .delete_reply(&board, &req.thread_id, &req.reply_id, &req.delete_password)
        .await?;

    if outcome == ReplyDeletion::Deleted {
        tracing::info!(board = %board, thread_id = %req.thread_id, reply_id = %req.reply_id, "Reply deleted");
        return Ok(SUCCESS);
    }

    tracing::debug!(
        board = %board,
        thread_id = %req.thread_id,
        reply_id = %req.reply_id,
        reason = ?outcome,
        "Reply delete refused"
    );
    Ok(INCORRECT_PASSWORD)
}
