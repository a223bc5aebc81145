mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{AuthHeaders, TestApp};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_announcement(app: &TestApp, auth: &AuthHeaders, payload: Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/admin/announcements")
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

#[tokio::test]
async fn test_announcement_board() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    let parent = app.register_parent("parent@example.com", "password123").await;

    let res = post_announcement(&app, &admin,
        json!({"title": "Nets cancelled", "body": "Ground is waterlogged."})).await;
    assert_eq!(res.status(), StatusCode::OK);

    post_announcement(&app, &admin,
        json!({"title": "Season opener", "body": "First game is on Saturday."})).await;

    // Parents read the board, newest first
    let board = parse_body(app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/announcements")
            .header(header::COOKIE, format!("access_token={}", parent.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap()).await;
    let board = board.as_array().unwrap();
    assert_eq!(board.len(), 2);
    assert_eq!(board[0]["title"], "Season opener");
    assert_eq!(board[1]["title"], "Nets cancelled");
}

#[tokio::test]
async fn test_announcement_validation_and_gating() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    let parent = app.register_parent("parent@example.com", "password123").await;

    let res = post_announcement(&app, &admin, json!({"title": "", "body": "text"})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = post_announcement(&app, &admin, json!({"title": "title", "body": "  "})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = post_announcement(&app, &parent,
        json!({"title": "Fake news", "body": "From a parent."})).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}
