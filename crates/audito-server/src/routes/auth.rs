//! Login and signup.

use audito_core::entities::{PublicUser, UserRole};
use audito_db::repos::user::NewUser;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: PublicUser,
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state
        .store
        .authenticate(&body.email, &body.password)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    let token = state.keys.issue(&user.id)?;
    info!(user_id = %user.id, "login");
    Ok(Json(LoginResponse {
        token,
        user: user.to_public(),
    }))
}

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let user = state
        .store
        .create_user(NewUser {
            name: body.name,
            email: body.email,
            password: body.password,
            role: UserRole::Auditor,
        })
        .await?;

    info!(user_id = %user.id, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Usuario creado".to_string(),
        }),
    ))
}
