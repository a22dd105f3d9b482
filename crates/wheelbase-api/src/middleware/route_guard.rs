//! Route guard
//!
//! Two coarse request classes: protected pages (`/dashboard`, the car API)
//! and public auth pages (`/login`, `/register`). Authenticated users are
//! bounced away from the auth pages, unauthenticated users away from the
//! protected ones; everything else passes through untouched. Verification is
//! purely cryptographic, so an invalid token means a silent redirect, never
//! an error payload, and no database is consulted here.

use axum::{
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tracing::debug;

use wheelbase_security::jwt::JwtService;
use wheelbase_shared::constants::{DASHBOARD_PATH, LOGIN_PATH, TOKEN_COOKIE};

/// Identity of the verified requester, inserted into request extensions for
/// handlers behind the guard.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i32,
    pub email: String,
}

pub async fn route_guard(mut request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();

    let jwt = match request.extensions().get::<Arc<JwtService>>() {
        Some(jwt) => jwt.clone(),
        None => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };

    let auth_user = token_cookie(request.headers())
        .and_then(|token| jwt.verify(&token).ok())
        .and_then(|claims| {
            let id = claims.sub.parse::<i32>().ok()?;
            Some(AuthUser {
                id,
                email: claims.email,
            })
        });

    if path.starts_with(LOGIN_PATH) || path.starts_with("/register") {
        if auth_user.is_some() {
            debug!("Authenticated request to {}, redirecting to dashboard", path);
            return Redirect::to(DASHBOARD_PATH).into_response();
        }
        return next.run(request).await;
    }

    if path.starts_with(DASHBOARD_PATH) || path.starts_with("/api/cars") {
        return match auth_user {
            Some(user) => {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
            None => {
                debug!("Unauthenticated request to {}, redirecting to login", path);
                Redirect::to(LOGIN_PATH).into_response()
            }
        };
    }

    next.run(request).await
}

fn token_cookie(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == TOKEN_COOKIE).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request as HttpRequest, routing::get, Extension, Router};
    use tower::ServiceExt;

    fn jwt() -> Arc<JwtService> {
        Arc::new(JwtService::new("test-secret".to_string(), 3600))
    }

    fn test_router(jwt: Arc<JwtService>) -> Router {
        Router::new()
            .route("/dashboard", get(|| async { "dashboard" }))
            .route("/login", get(|| async { "login page" }))
            .route("/register", get(|| async { "register page" }))
            .route("/health", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn(route_guard))
            .layer(Extension(jwt))
    }

    fn request(path: &str, cookie: Option<&str>) -> HttpRequest<Body> {
        let mut builder = HttpRequest::builder().uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn location(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn dashboard_without_cookie_redirects_to_login() {
        let response = test_router(jwt())
            .oneshot(request("/dashboard", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/login");
    }

    #[tokio::test]
    async fn dashboard_with_valid_cookie_passes() {
        let jwt = jwt();
        let token = jwt.issue(1, "a@x.com").unwrap();
        let response = test_router(jwt)
            .oneshot(request("/dashboard", Some(&format!("token={}", token))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn dashboard_with_garbage_token_redirects_to_login() {
        let response = test_router(jwt())
            .oneshot(request("/dashboard", Some("token=not-a-jwt")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/login");
    }

    #[tokio::test]
    async fn login_with_valid_cookie_redirects_to_dashboard() {
        let jwt = jwt();
        let token = jwt.issue(1, "a@x.com").unwrap();
        let response = test_router(jwt)
            .oneshot(request("/login", Some(&format!("token={}", token))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/dashboard");
    }

    #[tokio::test]
    async fn auth_pages_without_cookie_pass() {
        for path in ["/login", "/register"] {
            let response = test_router(jwt()).oneshot(request(path, None)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn other_paths_are_never_gated() {
        let response = test_router(jwt())
            .oneshot(request("/health", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn token_cookie_parses_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            "theme=dark; token=abc.def.ghi; lang=en".parse().unwrap(),
        );
        assert_eq!(token_cookie(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn token_cookie_absent_is_none() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, "theme=dark".parse().unwrap());
        assert_eq!(token_cookie(&headers), None);
        assert_eq!(token_cookie(&HeaderMap::new()), None);
    }
}
