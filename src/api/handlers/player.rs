use axum::{extract::{Query, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::{AdminUser, AuthUser};
use crate::api::dtos::requests::CreatePlayerRequest;
use crate::domain::models::player::NewPlayer;
use crate::error::AppError;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

#[derive(Deserialize)]
pub struct PlayerListQuery {
    pub team_id: Option<i64>,
}

pub async fn create_player(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreatePlayerRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.full_name.trim().is_empty() {
        return Err(AppError::Validation("full_name must not be empty".into()));
    }

    state.team_repo.find_by_id(payload.team_id).await?
        .ok_or(AppError::NotFound("Team not found".into()))?;

    let player = state.player_repo.create(&NewPlayer {
        full_name: payload.full_name,
        team_id: payload.team_id,
    }).await?;

    info!("Created player {} on team {}", player.id, player.team_id);
    Ok(Json(player))
}

pub async fn list_players(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Query(query): Query<PlayerListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let players = match query.team_id {
        Some(team_id) => state.player_repo.list_by_team(team_id).await?,
        None => state.player_repo.list().await?,
    };
    Ok(Json(players))
}
