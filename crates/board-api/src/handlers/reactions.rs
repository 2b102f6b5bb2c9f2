//! Reaction handlers
//!
//! Endpoints for comment reactions.

use axum::{extract::State, Json};
use board_service::dto::{AddReactionRequest, StatusResponse};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Add one reaction to a comment
///
/// POST /reactions
pub async fn add_reaction(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AddReactionRequest>,
) -> ApiResult<Created<Json<StatusResponse>>> {
    state.reactions().record_reaction(request).await?;
    Ok(Created(Json(StatusResponse::reaction_recorded())))
}
