use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put, delete},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, auth, team, player, connection, session, rsvp, announcement};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/refresh", post(auth::refresh))
        .route("/api/v1/auth/logout", post(auth::logout))

        // Teams & Players
        .route("/api/v1/teams", get(team::list_teams))
        .route("/api/v1/admin/teams", post(team::create_team))
        .route("/api/v1/players", get(player::list_players))
        .route("/api/v1/admin/players", post(player::create_player))

        // Parent-player connections
        .route("/api/v1/parent/connections", post(connection::create_connection_request).get(connection::list_my_connections))
        .route("/api/v1/admin/connections", get(connection::list_connection_requests))
        .route("/api/v1/admin/connections/{request_id}", put(connection::review_connection_request))

        // Session schedule
        .route("/api/v1/sessions", get(session::list_sessions))
        .route("/api/v1/sessions/{session_id}", get(session::get_session))
        .route("/api/v1/admin/sessions", post(session::create_session))
        .route("/api/v1/admin/sessions/{session_id}", put(session::update_session).delete(session::delete_session))
        .route("/api/v1/admin/sessions/{session_id}/rsvps", get(rsvp::session_rsvps))

        // RSVPs
        .route("/api/v1/rsvps", post(rsvp::submit_rsvp))
        .route("/api/v1/parent/rsvps", get(rsvp::my_rsvps))

        // Announcements
        .route("/api/v1/announcements", get(announcement::recent_announcements))
        .route("/api/v1/admin/announcements", post(announcement::create_announcement))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
