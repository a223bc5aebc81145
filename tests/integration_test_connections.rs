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

async fn post_json(app: &TestApp, auth: &AuthHeaders, uri: &str, payload: Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri(uri)
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

async fn put_json(app: &TestApp, auth: &AuthHeaders, uri: &str, payload: Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("PUT").uri(uri)
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

async fn get_json(app: &TestApp, auth: &AuthHeaders, uri: &str) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("GET").uri(uri)
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap()
}

async fn seed_player(app: &TestApp, admin: &AuthHeaders, name: &str) -> i64 {
    let team = parse_body(post_json(app, admin, "/api/v1/admin/teams",
        json!({"name": "U13 Tigers", "age_group": "U13"})).await).await;
    let player = parse_body(post_json(app, admin, "/api/v1/admin/players",
        json!({"full_name": name, "team_id": team["id"].as_i64().unwrap()})).await).await;
    player["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_connection_request_workflow() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    let parent = app.register_parent("parent@example.com", "password123").await;

    let player_id = seed_player(&app, &admin, "Arjun Patel").await;

    // Parent opens a request
    let res = post_json(&app, &parent, "/api/v1/parent/connections", json!({"player_id": player_id})).await;
    assert_eq!(res.status(), StatusCode::OK);
    let request = parse_body(res).await;
    assert_eq!(request["status"], "pending");
    let request_id = request["id"].as_str().unwrap().to_string();

    // Duplicate request for the same player is a conflict
    let res = post_json(&app, &parent, "/api/v1/parent/connections", json!({"player_id": player_id})).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // Admin sees it in the pending queue
    let pending = parse_body(get_json(&app, &admin, "/api/v1/admin/connections").await).await;
    assert_eq!(pending.as_array().unwrap().len(), 1);
    assert_eq!(pending[0]["id"], request_id.as_str());

    // Approve
    let res = put_json(&app, &admin, &format!("/api/v1/admin/connections/{}", request_id),
        json!({"status": "approved"})).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["status"], "approved");

    // The pending queue is now empty; the approved filter finds it
    let pending = parse_body(get_json(&app, &admin, "/api/v1/admin/connections?status=pending").await).await;
    assert_eq!(pending.as_array().unwrap().len(), 0);
    let approved = parse_body(get_json(&app, &admin, "/api/v1/admin/connections?status=approved").await).await;
    assert_eq!(approved.as_array().unwrap().len(), 1);

    // Parent sees the outcome in their own list
    let mine = parse_body(get_json(&app, &parent, "/api/v1/parent/connections").await).await;
    assert_eq!(mine.as_array().unwrap().len(), 1);
    assert_eq!(mine[0]["status"], "approved");
}

#[tokio::test]
async fn test_rejected_request_can_be_reopened() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    let parent = app.register_parent("parent@example.com", "password123").await;

    let player_id = seed_player(&app, &admin, "Sam Iyer").await;

    let request = parse_body(post_json(&app, &parent, "/api/v1/parent/connections",
        json!({"player_id": player_id})).await).await;
    let request_id = request["id"].as_str().unwrap();

    let res = put_json(&app, &admin, &format!("/api/v1/admin/connections/{}", request_id),
        json!({"status": "rejected"})).await;
    assert_eq!(res.status(), StatusCode::OK);

    // A rejected pair does not block a fresh request
    let res = post_json(&app, &parent, "/api/v1/parent/connections", json!({"player_id": player_id})).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["status"], "pending");
}

#[tokio::test]
async fn test_connection_review_validation() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    let parent = app.register_parent("parent@example.com", "password123").await;

    let player_id = seed_player(&app, &admin, "Sam Iyer").await;
    let request = parse_body(post_json(&app, &parent, "/api/v1/parent/connections",
        json!({"player_id": player_id})).await).await;
    let request_id = request["id"].as_str().unwrap();

    // Review can only approve or reject
    let res = put_json(&app, &admin, &format!("/api/v1/admin/connections/{}", request_id),
        json!({"status": "pending"})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Unknown request id
    let res = put_json(&app, &admin, "/api/v1/admin/connections/no-such-id",
        json!({"status": "approved"})).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Request for a player that does not exist
    let res = post_json(&app, &parent, "/api/v1/parent/connections", json!({"player_id": 9999})).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Unknown status filter on the admin queue
    let res = get_json(&app, &admin, "/api/v1/admin/connections?status=open").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_connection_review_is_admin_only() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    let parent = app.register_parent("parent@example.com", "password123").await;

    let player_id = seed_player(&app, &admin, "Sam Iyer").await;
    let request = parse_body(post_json(&app, &parent, "/api/v1/parent/connections",
        json!({"player_id": player_id})).await).await;
    let request_id = request["id"].as_str().unwrap();

    let res = put_json(&app, &parent, &format!("/api/v1/admin/connections/{}", request_id),
        json!({"status": "approved"})).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = get_json(&app, &parent, "/api/v1/admin/connections").await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}
