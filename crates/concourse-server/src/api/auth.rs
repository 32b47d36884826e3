//! Mock authentication handlers: signup, signin, logout, profile.
//!
//! Signup and signin are public; logout and `me` sit behind the bearer
//! middleware but still read the token themselves to resolve the session.

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::middleware::{extract_bearer_token, RequestId};
use crate::users::{AuthError, UserProfile};

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Deserialize)]
pub(super) struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct SigninRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub(super) struct SessionData {
    pub token: String,
    pub user: UserProfile,
}

fn validate_email(req_id: &str, email: &str) -> Result<(), ApiError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::new(
            req_id,
            "validation_error",
            "email must be a valid address",
        ));
    }
    Ok(())
}

fn map_auth_error(req_id: &str, error: &AuthError) -> ApiError {
    match error {
        AuthError::EmailTaken => ApiError::new(req_id, "conflict", error.to_string()),
        AuthError::InvalidCredentials => ApiError::new(req_id, "unauthorized", error.to_string()),
    }
}

/// POST /api/v1/auth/signup — register and open a session.
pub(super) async fn signup(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<SignupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SessionData>>), ApiError> {
    let rid = &req_id.0;

    validate_email(rid, &body.email)?;
    if body.name.trim().is_empty() {
        return Err(ApiError::new(
            rid,
            "validation_error",
            "name must be non-empty",
        ));
    }
    if body.password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::new(
            rid,
            "validation_error",
            format!("password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }

    let user = state
        .users
        .sign_up(body.email.trim(), &body.password, body.name.trim())
        .await
        .map_err(|e| map_auth_error(rid, &e))?;
    let token = state.sessions.issue(user.id).await;
    tracing::info!(user_id = user.id, "account created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: SessionData { token, user },
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}

/// POST /api/v1/auth/signin — open a session for an existing account.
pub(super) async fn signin(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<SigninRequest>,
) -> Result<Json<ApiResponse<SessionData>>, ApiError> {
    let rid = &req_id.0;

    let user = state
        .users
        .sign_in(body.email.trim(), &body.password)
        .await
        .map_err(|e| map_auth_error(rid, &e))?;
    let token = state.sessions.issue(user.id).await;

    Ok(Json(ApiResponse {
        data: SessionData { token, user },
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// POST /api/v1/auth/logout — revoke the presented session token.
pub(super) async fn logout(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let rid = &req_id.0;

    let token = extract_bearer_token(headers.get(AUTHORIZATION))
        .ok_or_else(|| ApiError::new(rid, "unauthorized", "missing bearer token"))?;
    if !state.sessions.revoke(token).await {
        return Err(ApiError::new(rid, "unauthorized", "no such session"));
    }

    Ok(Json(ApiResponse {
        data: serde_json::json!({ "logged_out": true }),
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// GET /api/v1/auth/me — profile for the presented session token.
pub(super) async fn me(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<UserProfile>>, ApiError> {
    let rid = &req_id.0;

    let token = extract_bearer_token(headers.get(AUTHORIZATION))
        .ok_or_else(|| ApiError::new(rid, "unauthorized", "missing bearer token"))?;
    let user_id = state
        .sessions
        .user_id(token)
        .await
        .ok_or_else(|| ApiError::new(rid, "unauthorized", "no such session"))?;
    let profile = state
        .users
        .profile(user_id)
        .await
        .ok_or_else(|| ApiError::new(rid, "unauthorized", "no such session"))?;

    Ok(Json(ApiResponse {
        data: profile,
        meta: ResponseMeta::new(req_id.0),
    }))
}
