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

async fn get_json(app: &TestApp, auth: &AuthHeaders, uri: &str) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("GET").uri(uri)
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap()
}

#[tokio::test]
async fn test_team_and_player_management() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;

    let res = post_json(&app, &admin, "/api/v1/admin/teams",
        json!({"name": "U13 Tigers", "age_group": "U13"})).await;
    assert_eq!(res.status(), StatusCode::OK);
    let tigers = parse_body(res).await;
    let tigers_id = tigers["id"].as_i64().unwrap();

    let lions = parse_body(post_json(&app, &admin, "/api/v1/admin/teams",
        json!({"name": "U15 Lions", "age_group": "U15"})).await).await;
    let lions_id = lions["id"].as_i64().unwrap();
    assert_ne!(tigers_id, lions_id);

    post_json(&app, &admin, "/api/v1/admin/players",
        json!({"full_name": "Arjun Patel", "team_id": tigers_id})).await;
    post_json(&app, &admin, "/api/v1/admin/players",
        json!({"full_name": "Sam Iyer", "team_id": tigers_id})).await;
    post_json(&app, &admin, "/api/v1/admin/players",
        json!({"full_name": "Dev Sharma", "team_id": lions_id})).await;

    let teams = parse_body(get_json(&app, &admin, "/api/v1/teams").await).await;
    assert_eq!(teams.as_array().unwrap().len(), 2);

    let everyone = parse_body(get_json(&app, &admin, "/api/v1/players").await).await;
    assert_eq!(everyone.as_array().unwrap().len(), 3);

    let tigers_roster = parse_body(get_json(&app, &admin,
        &format!("/api/v1/players?team_id={}", tigers_id)).await).await;
    assert_eq!(tigers_roster.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_player_requires_existing_team() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;

    let res = post_json(&app, &admin, "/api/v1/admin/players",
        json!({"full_name": "Arjun Patel", "team_id": 42})).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_team_and_player_validation() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;

    let res = post_json(&app, &admin, "/api/v1/admin/teams",
        json!({"name": "  ", "age_group": "U13"})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = post_json(&app, &admin, "/api/v1/admin/teams",
        json!({"name": "U13 Tigers", "age_group": ""})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let team = parse_body(post_json(&app, &admin, "/api/v1/admin/teams",
        json!({"name": "U13 Tigers", "age_group": "U13"})).await).await;

    let res = post_json(&app, &admin, "/api/v1/admin/players",
        json!({"full_name": "", "team_id": team["id"].as_i64().unwrap()})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_roster_writes_are_admin_only() {
    let app = TestApp::new().await;
    let parent = app.register_parent("parent@example.com", "password123").await;

    let res = post_json(&app, &parent, "/api/v1/admin/teams",
        json!({"name": "U13 Tigers", "age_group": "U13"})).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = post_json(&app, &parent, "/api/v1/admin/players",
        json!({"full_name": "Arjun Patel", "team_id": 1})).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // Reads stay open to any signed-in user
    let res = get_json(&app, &parent, "/api/v1/teams").await;
    assert_eq!(res.status(), StatusCode::OK);
    let res = get_json(&app, &parent, "/api/v1/players").await;
    assert_eq!(res.status(), StatusCode::OK);
}
