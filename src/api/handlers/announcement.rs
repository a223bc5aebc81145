use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::{AdminUser, AuthUser};
use crate::api::dtos::requests::CreateAnnouncementRequest;
use crate::domain::models::announcement::Announcement;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

const RECENT_ANNOUNCEMENT_LIMIT: i64 = 20;

pub async fn create_announcement(
    State(state): State<Arc<AppState>>,
    admin: AdminUser,
    Json(payload): Json<CreateAnnouncementRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::Validation("title must not be empty".into()));
    }
    if payload.body.trim().is_empty() {
        return Err(AppError::Validation("body must not be empty".into()));
    }

    let announcement = Announcement::new(payload.title, payload.body, admin.0.id);
    let created = state.announcement_repo.create(&announcement).await?;

    info!("Posted announcement {}", created.id);
    Ok(Json(created))
}

pub async fn recent_announcements(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let announcements = state.announcement_repo.list_recent(RECENT_ANNOUNCEMENT_LIMIT).await?;
    Ok(Json(announcements))
}
