use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::{AdminUser, AuthUser};
use crate::api::dtos::requests::{CreateSessionRequest, SessionListQuery, UpdateSessionRequest};
use crate::domain::models::session::{NewSessionParams, SessionFilter, SessionPatch};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_session(
    State(state): State<Arc<AppState>>,
    admin: AdminUser,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let session = state.scheduling_service.create_session(NewSessionParams {
        team_id: payload.team_id,
        team_name: payload.team_name,
        session_type: payload.session_type,
        start_time: payload.start_time,
        end_time: payload.end_time,
        location: payload.location,
        opponent: payload.opponent,
        notes: payload.notes,
        max_attendees: payload.max_attendees,
        created_by: admin.0.id,
    }).await?;

    info!("Created {} session {} for team {}", session.session_type, session.id, session.team_id);
    Ok(Json(session))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let session = state.scheduling_service.get_session(&session_id).await?;
    Ok(Json(session))
}

pub async fn list_sessions(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Query(query): Query<SessionListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let sessions = state.scheduling_service.list_sessions(&SessionFilter {
        from: query.from,
        to: query.to,
        team_id: query.team_id,
        session_type: query.session_type,
    }).await?;

    Ok(Json(sessions))
}

pub async fn update_session(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(session_id): Path<String>,
    Json(payload): Json<UpdateSessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Empty strings on nullable text fields clear the stored value.
    let patch = SessionPatch {
        team_id: payload.team_id,
        team_name: payload.team_name,
        session_type: payload.session_type,
        start_time: payload.start_time,
        end_time: payload.end_time,
        location: payload.location,
        opponent: payload.opponent.map(|s| if s.is_empty() { None } else { Some(s) }),
        notes: payload.notes.map(|s| if s.is_empty() { None } else { Some(s) }),
        max_attendees: payload.max_attendees.map(Some),
    };

    let session = state.scheduling_service.update_session(&session_id, patch).await?;

    info!("Updated session {}", session.id);
    Ok(Json(session))
}

pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.scheduling_service.delete_session(&session_id).await?;

    info!("Deleted session {}", session_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
