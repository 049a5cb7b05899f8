use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::COOKIE},
    response::IntoResponse,
};
use jsonwebtoken::{Algorithm, EncodingKey, Header, errors::ErrorKind, get_current_timestamp};
use secrecy::SecretString;
use serde_json::{Value, json};
use tower::ServiceExt;

use session_gate::{
    app::build_router,
    error::AppError,
    services::auth::{AuthFailure, TokenAuthenticator, access_jwt::classify},
    state::AppState,
};

const SECRET: &str = "integration-access-secret";

fn app() -> Router {
    let auth = TokenAuthenticator::new(&SecretString::from(SECRET.to_string()));
    build_router(AppState::new(Arc::new(auth)))
}

fn sign(secret: &str, claims: Value) -> String {
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

async fn call(router: Router, cookie: Option<&str>) -> (StatusCode, Value) {
    let mut req = Request::builder().uri("/api/v1/me");
    if let Some(cookie) = cookie {
        req = req.header(COOKIE, cookie);
    }

    let response = router
        .oneshot(req.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn scenario_a_missing_token() {
    let (status, body) = call(app(), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body,
        json!({ "message": "User not authenticated", "success": false })
    );
}

#[tokio::test]
async fn other_cookies_without_token_are_unauthenticated() {
    let (status, body) = call(app(), Some("theme=dark; token=")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "User not authenticated");
}

#[tokio::test]
async fn scenario_b_wrong_secret() {
    let token = sign("not-the-secret", json!({ "userId": "abc123" }));
    let (status, body) = call(app(), Some(&format!("token={token}"))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "message": "Invalid token", "success": false }));
}

#[tokio::test]
async fn scenario_c_expired_token() {
    let token = sign(
        SECRET,
        json!({ "userId": "abc123", "exp": get_current_timestamp() - 1 }),
    );
    let (status, body) = call(app(), Some(&format!("token={token}"))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body,
        json!({ "message": "Token has expired", "success": false })
    );
}

#[tokio::test]
async fn scenario_d_valid_token_reaches_handler() {
    let token = sign(
        SECRET,
        json!({ "userId": "abc123", "exp": get_current_timestamp() + 600, "role": "admin" }),
    );
    let (status, body) = call(app(), Some(&format!("lang=en; token={token}"))).await;

    assert_eq!(status, StatusCode::OK);
    // Only the id is exposed downstream.
    assert_eq!(body, json!({ "user": { "id": "abc123" } }));
}

// An HS256 key built from a secret cannot fault at verification time, so
// Scenario E is covered at the classification-to-response step.
#[tokio::test]
async fn scenario_e_internal_failure_kind_renders_500() {
    let fault = jsonwebtoken::errors::Error::from(ErrorKind::InvalidKeyFormat);
    let response = AppError::from(AuthFailure::new(classify(&fault))).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body,
        json!({ "message": "Internal Server Error", "success": false })
    );
}

async fn assert_invalid_token(claims: Value) {
    let token = sign(SECRET, claims);
    let (status, body) = call(app(), Some(&format!("token={token}"))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "message": "Invalid token", "success": false }));
}

#[tokio::test]
async fn string_exp_is_rejected_as_invalid() {
    assert_invalid_token(json!({ "userId": "abc123", "exp": "1000" })).await;
}

#[tokio::test]
async fn negative_exp_is_rejected_as_invalid() {
    assert_invalid_token(json!({ "userId": "abc123", "exp": -1 })).await;
}

#[tokio::test]
async fn future_nbf_is_rejected_as_invalid() {
    assert_invalid_token(json!({ "userId": "abc123", "nbf": get_current_timestamp() + 1000 }))
        .await;
}

#[tokio::test]
async fn zero_user_id_is_rejected_as_invalid() {
    assert_invalid_token(json!({ "userId": 0 })).await;
}

#[tokio::test]
async fn verified_token_without_user_id_is_invalid() {
    let token = sign(SECRET, json!({ "userId": "" }));
    let (status, body) = call(app(), Some(&format!("token={token}"))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token");
}

#[tokio::test]
async fn same_token_twice_gives_same_identity() {
    let router = app();
    let token = sign(SECRET, json!({ "userId": 7 }));
    let cookie = format!("token={token}");

    let first = call(router.clone(), Some(&cookie)).await;
    let second = call(router, Some(&cookie)).await;

    assert_eq!(first, second);
    assert_eq!(first.1, json!({ "user": { "id": 7 } }));
}

#[tokio::test]
async fn health_is_not_behind_the_gate() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
