//! PDF report download.
//!
//! The lookup is not scoped to the caller: any authenticated user who knows
//! an audit id can download its report.

use audito_report::{MIME_TYPE, content_disposition};
use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderValue};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::extract::AuthUser;
use crate::state::AppState;

pub async fn pdf(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<(HeaderMap, Vec<u8>), ApiError> {
    let audit = state.store.get_audit(&id).await?.ok_or(ApiError::NotFound)?;
    debug!(audit_id = %audit.id, user_id = %user.user_id(), "rendering report");

    let disposition = content_disposition(&audit.name);
    let renderer = state.renderer;
    let bytes = tokio::task::spawn_blocking(move || renderer.render(&audit))
        .await
        .map_err(|e| ApiError::RenderFailure(e.to_string()))??;

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(MIME_TYPE));
    headers.insert(
        CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition).map_err(|e| ApiError::Internal(e.to_string()))?,
    );

    info!(audit_id = %id, bytes = bytes.len(), "report rendered");
    Ok((headers, bytes))
}
