use audito_core::entities::{Audit, NewAudit};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::error::ApiError;
use crate::extract::AuthUser;
use crate::state::AppState;

/// The caller's audits, newest first.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Audit>>, ApiError> {
    Ok(Json(state.store.list_audits_by_owner(user.user_id()).await?))
}

/// Record a new audit owned by the caller. The submitted score is stored as-is.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(body): Json<NewAudit>,
) -> Result<(StatusCode, Json<Audit>), ApiError> {
    let audit = state.store.create_audit(user.user_id(), body).await?;
    Ok((StatusCode::CREATED, Json(audit)))
}
