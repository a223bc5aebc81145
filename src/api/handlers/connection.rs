use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::{AdminUser, AuthUser};
use crate::api::dtos::requests::{ConnectionListQuery, CreateConnectionRequest, ReviewConnectionRequest};
use crate::domain::models::connection::{ConnectionRequest, CONNECTION_APPROVED, CONNECTION_PENDING, CONNECTION_REJECTED};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_connection_request(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<CreateConnectionRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.player_repo.find_by_id(payload.player_id).await?
        .ok_or(AppError::NotFound("Player not found".into()))?;

    if state.connection_repo.find_live_by_pair(&user.id, payload.player_id).await?.is_some() {
        return Err(AppError::Conflict("A connection request already exists for this player".into()));
    }

    let request = ConnectionRequest::new(user.id, payload.player_id);
    let created = state.connection_repo.create(&request).await?;

    info!("Connection request {} opened for player {}", created.id, created.player_id);
    Ok(Json(created))
}

pub async fn list_my_connections(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let requests = state.connection_repo.list_by_parent(&user.id).await?;
    Ok(Json(requests))
}

pub async fn list_connection_requests(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Query(query): Query<ConnectionListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let status = query.status.unwrap_or_else(|| CONNECTION_PENDING.to_string());
    if status != CONNECTION_PENDING && status != CONNECTION_APPROVED && status != CONNECTION_REJECTED {
        return Err(AppError::Validation("status must be one of: pending, approved, rejected".into()));
    }

    let requests = state.connection_repo.list_by_status(&status).await?;
    Ok(Json(requests))
}

pub async fn review_connection_request(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(request_id): Path<String>,
    Json(payload): Json<ReviewConnectionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.status != CONNECTION_APPROVED && payload.status != CONNECTION_REJECTED {
        return Err(AppError::Validation("status must be one of: approved, rejected".into()));
    }

    state.connection_repo.find_by_id(&request_id).await?
        .ok_or(AppError::NotFound("Connection request not found".into()))?;

    let updated = state.connection_repo.update_status(&request_id, &payload.status).await?;

    info!("Connection request {} marked {}", updated.id, updated.status);
    Ok(Json(updated))
}
