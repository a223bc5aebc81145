use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::{AdminUser, AuthUser};
use crate::api::dtos::requests::CreateTeamRequest;
use crate::domain::models::team::NewTeam;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_team(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateTeamRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".into()));
    }
    if payload.age_group.trim().is_empty() {
        return Err(AppError::Validation("age_group must not be empty".into()));
    }

    let team = state.team_repo.create(&NewTeam {
        name: payload.name,
        age_group: payload.age_group,
    }).await?;

    info!("Created team {} ({})", team.id, team.name);
    Ok(Json(team))
}

pub async fn list_teams(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let teams = state.team_repo.list().await?;
    Ok(Json(teams))
}
