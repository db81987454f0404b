use audito_core::entities::ChecklistTemplate;
use axum::Json;
use axum::extract::State;

use crate::error::ApiError;
use crate::state::AppState;

/// Stored checklist templates, seeded with the ISO defaults on first read.
pub async fn defaults(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChecklistTemplate>>, ApiError> {
    Ok(Json(state.store.list_checklists().await?))
}
