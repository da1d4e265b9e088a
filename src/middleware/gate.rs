//! Request gate middleware: `token` cookie → `RequestGate::evaluate` → transport.
//!
//! - Only paths matched by `GatePolicy::applies_to` are evaluated; everything
//!   else passes straight through.
//! - The raw request path is handed to the gate; `GatePolicy` classifies it
//!   both raw and decoded, so encoded or dotted forms cannot dodge the admin check.
//! - `Decision::Allow` continues to the inner handler.
//! - `Decision::RedirectTo(url)` answers `307 Temporary Redirect` with `Location: url`.

use axum::{
    Router,
    body::Body,
    extract::{OriginalUri, State},
    http::{HeaderValue, Request, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;

use crate::error::AppError;
use crate::gate::Decision;
use crate::state::AppState;

/// Cookie carrying the credential.
pub const CREDENTIAL_COOKIE: &str = "token";

/// Apply the gate to every route of `router`.
///
/// ```ignore
/// let router = pages::routes();
/// let router = middleware::gate::apply(router, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, gate_middleware))
}

async fn gate_middleware(
    State(state): State<AppState>,
    OriginalUri(original_uri): OriginalUri,
    jar: CookieJar,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = original_uri.path();

    if !state.gate.policy().applies_to(path) {
        return Ok(next.run(req).await);
    }

    // Missing cookie is the same as an empty credential.
    let credential = jar
        .get(CREDENTIAL_COOKIE)
        .map(|cookie| cookie.value())
        .unwrap_or_default();

    match state.gate.evaluate(path, credential).await {
        Decision::Allow => {
            tracing::debug!(path = %path, "gate: allow");
            Ok(next.run(req).await)
        }
        Decision::RedirectTo(target) => {
            tracing::debug!(path = %path, location = %target, "gate: redirect");
            redirect(&target)
        }
    }
}

fn redirect(target: &str) -> Result<Response, AppError> {
    let location = HeaderValue::from_str(target)
        .map_err(|_| AppError::InvalidRedirect(target.to_string()))?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::routing::get;
    use tower::ServiceExt;

    use super::*;
    use crate::gate::{GatePolicy, RequestGate};
    use crate::services::auth::JwtVerifier;
    use crate::services::auth::testing::{SECRET, expired_token, token_for_role};

    fn test_app() -> Router {
        let verifier = Arc::new(JwtVerifier::new(Some(SECRET.as_bytes()), 0));
        let state = AppState::new(Arc::new(RequestGate::new(verifier, GatePolicy::default())));

        let router = Router::new()
            .route("/login", get(|| async { "login" }))
            .route("/register", get(|| async { "register" }))
            .route("/com-man/{*rest}", get(|| async { "com-man" }))
            .route("/health", get(|| async { "ok" }));

        apply(router, state.clone()).with_state(state)
    }

    fn request(path: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(path);
        if let Some(token) = token {
            builder = builder.header(header::COOKIE, format!("theme=dark; token={token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    fn location(resp: &Response) -> Option<&str> {
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    #[tokio::test]
    async fn login_page_without_cookie_is_served() {
        let resp = test_app().oneshot(request("/login", None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn login_page_with_valid_cookie_redirects_to_role_home() {
        let token = token_for_role("admin");
        let resp = test_app()
            .oneshot(request("/login", Some(&token)))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&resp), Some("/com-man/admin"));
    }

    #[tokio::test]
    async fn register_page_with_expired_cookie_is_served() {
        let token = expired_token("user");
        let resp = test_app()
            .oneshot(request("/register", Some(&token)))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn protected_page_without_cookie_redirects_to_login() {
        let resp = test_app()
            .oneshot(request("/com-man/admin/settings", None))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&resp), Some("/login"));
    }

    #[tokio::test]
    async fn admin_page_with_user_cookie_redirects_to_login() {
        let token = token_for_role("user");
        let resp = test_app()
            .oneshot(request("/com-man/admin/settings", Some(&token)))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&resp), Some("/login"));
    }

    #[tokio::test]
    async fn protected_page_with_user_cookie_is_served() {
        let token = token_for_role("user");
        let resp = test_app()
            .oneshot(request("/com-man/profile?tab=1", Some(&token)))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"com-man");
    }

    #[tokio::test]
    async fn encoded_or_dotted_admin_paths_redirect_user_to_login() {
        let token = token_for_role("user");

        for path in [
            "/com-man/%61dmin/settings",
            "/com-man/./admin/settings",
            "/com-man/%2e/admin/settings",
            "/com-man//admin/settings",
        ] {
            let resp = test_app()
                .oneshot(request(path, Some(&token)))
                .await
                .unwrap();

            assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT, "{path}");
            assert_eq!(location(&resp), Some("/login"), "{path}");
        }
    }

    #[tokio::test]
    async fn encoded_admin_path_is_served_to_admin() {
        let token = token_for_role("admin");
        let resp = test_app()
            .oneshot(request("/com-man/%61dmin/settings", Some(&token)))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn dot_segments_toward_login_still_require_credential() {
        let resp = test_app()
            .oneshot(request("/com-man/%2e%2e/login", None))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&resp), Some("/login"));
    }

    #[tokio::test]
    async fn ungated_paths_pass_through() {
        let resp = test_app().oneshot(request("/health", None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn role_segment_is_percent_encoded() {
        let token = token_for_role("ops team");
        let resp = test_app()
            .oneshot(request("/login", Some(&token)))
            .await
            .unwrap();

        assert_eq!(location(&resp), Some("/com-man/ops%20team"));
    }

    #[test]
    fn redirect_rejects_invalid_header_values() {
        assert!(matches!(
            redirect("/com-man/\n"),
            Err(AppError::InvalidRedirect(_))
        ));
    }
}
