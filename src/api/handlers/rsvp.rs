use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::{AdminUser, AuthUser};
use crate::api::dtos::requests::{MyRsvpsQuery, SubmitRsvpRequest};
use crate::api::dtos::responses::SessionRsvpsResponse;
use crate::domain::models::rsvp::RsvpCounts;
use crate::domain::services::rsvp_service::SubmitRsvpParams;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn submit_rsvp(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<SubmitRsvpRequest>,
) -> Result<impl IntoResponse, AppError> {
    let rsvp = state.rsvp_service.submit_rsvp(SubmitRsvpParams {
        session_id: payload.session_id,
        player_id: payload.player_id,
        status: payload.status,
        comment: payload.comment,
        acting_guardian: user.id,
    }).await?;

    info!("RSVP recorded: player {} is '{}' for session {}", rsvp.player_id, rsvp.status, rsvp.session_id);
    Ok(Json(rsvp))
}

pub async fn session_rsvps(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let rsvps = state.rsvp_service.list_rsvps_for_session(&session_id).await?;
    let counts = RsvpCounts::tally(&rsvps);

    Ok(Json(SessionRsvpsResponse { session_id, counts, rsvps }))
}

pub async fn my_rsvps(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Query(query): Query<MyRsvpsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let session_ids: Vec<String> = query.session_ids
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let rsvps = state.rsvp_service.list_rsvps_for_guardian(&user.id, &session_ids).await?;
    Ok(Json(rsvps))
}
