//! Comment handlers
//!
//! Endpoints for the comment thread.

use axum::{extract::State, Json};
use board_service::dto::{CommentNodeResponse, CommentResponse, CreateCommentRequest};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Get the comment thread
///
/// GET /comments
pub async fn list_comments(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CommentNodeResponse>>> {
    let thread = state.comments().list_thread().await?;
    Ok(Json(thread))
}

/// Post a comment or a reply
///
/// POST /comments
pub async fn create_comment(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let comment = state.comments().create_comment(request).await?;
    Ok(Created(Json(comment)))
}
