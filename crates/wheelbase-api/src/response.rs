//! Error-to-HTTP response mapping

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use wheelbase_core::error::DomainError;

/// Wraps `DomainError` so handlers can use `?` straight through to an HTTP
/// response.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::ValidationError(_) => {
                tracing::warn!("Validation error: {}", self.0);
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }
            DomainError::DuplicateEmail => {
                tracing::warn!("Duplicate email on signup");
                (StatusCode::CONFLICT, self.0.to_string())
            }
            DomainError::InvalidCredentials => {
                tracing::warn!("Invalid credentials");
                (StatusCode::UNAUTHORIZED, self.0.to_string())
            }
            DomainError::UserNotFound | DomainError::CarNotFound => {
                tracing::warn!("Not found: {}", self.0);
                (StatusCode::NOT_FOUND, self.0.to_string())
            }
            DomainError::NotCarOwner => {
                tracing::warn!("Ownership check failed");
                (StatusCode::FORBIDDEN, self.0.to_string())
            }
            DomainError::DatabaseError(_)
            | DomainError::PasswordHashError(_)
            | DomainError::TokenGenerationError(_)
            | DomainError::InternalError(_) => {
                tracing::error!("Internal error: {}", self.0);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorBody {
            success: false,
            message,
        });

        (status, body).into_response()
    }
}

/// `Json` extractor whose rejection carries the same `{success, message}`
/// body as every other error, instead of axum's plain-text 422.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                tracing::warn!("Malformed request body: {}", rejection);
                Err(ApiError(DomainError::ValidationError(
                    "Invalid input.".to_string(),
                )))
            }
        }
    }
}
