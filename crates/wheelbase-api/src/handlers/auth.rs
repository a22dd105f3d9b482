//! Authentication HTTP handlers (signup, login, logout)

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use validator::Validate;

use wheelbase_core::error::DomainError;
use wheelbase_shared::constants::TOKEN_COOKIE;

use crate::dto::auth::{AuthResponse, LoginRequest, SignupRequest};
use crate::response::{ApiError, ApiJson};
use crate::state::AppState;

/// POST /api/auth/signup
///
/// Creates the account without logging the user in; no token is issued.
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SignupRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    payload
        .validate()
        .map_err(|_| DomainError::ValidationError("Invalid input.".to_string()))?;

    state
        .auth_service
        .signup(&payload.name, &payload.email, &payload.password)
        .await?;

    Ok(Json(AuthResponse::ok("Signup successful")))
}

/// POST /api/auth/login
///
/// On success the session token is returned in the body and set as an
/// HttpOnly cookie; the guard reads it back from the cookie only.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<Response, ApiError> {
    let result = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    let cookie = session_cookie(
        &result.token,
        state.config.jwt.token_expiry,
        state.config.jwt.cookie_secure,
    );
    let body = AuthResponse::with_token("Login successful", result.token);

    Ok(([(header::SET_COOKIE, cookie)], Json(body)).into_response())
}

/// POST /api/auth/logout
///
/// The token is stateless, so logout is just clearing the cookie.
pub async fn logout(State(state): State<AppState>) -> Response {
    let cookie = clear_session_cookie(state.config.jwt.cookie_secure);
    (
        [(header::SET_COOKIE, cookie)],
        Json(AuthResponse::ok("Logged out successfully")),
    )
        .into_response()
}

fn session_cookie(token: &str, max_age: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Strict",
        TOKEN_COOKIE, token, max_age
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

fn clear_session_cookie(secure: bool) -> String {
    session_cookie("", 0, secure)
}
