use std::sync::Arc;
use chrono::{DateTime, Duration, Utc};
use crate::domain::models::session::{
    NewSessionParams, SessionFilter, SessionPatch, TrainingSession,
    SESSION_TYPE_GAME, SESSION_TYPE_PRACTICE,
};
use crate::domain::ports::SessionRepository;
use crate::error::AppError;

const MAX_SESSION_HOURS: i64 = 8;

/// Single source of truth for session CRUD and read-side filtering.
/// Validation happens here so every write path enforces the same rules;
/// failures never leave a partial row behind.
pub struct SchedulingService {
    sessions: Arc<dyn SessionRepository>,
}

impl SchedulingService {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    pub async fn create_session(&self, params: NewSessionParams) -> Result<TrainingSession, AppError> {
        validate_session_type(&params.session_type)?;
        validate_team(params.team_id, &params.team_name)?;
        validate_location(&params.location)?;
        validate_window(params.start_time, params.end_time)?;
        validate_max_attendees(params.max_attendees)?;

        let session = TrainingSession::new(params);
        self.sessions.create(&session).await
    }

    pub async fn update_session(&self, id: &str, patch: SessionPatch) -> Result<TrainingSession, AppError> {
        let mut session = self.sessions.find_by_id(id).await?
            .ok_or(AppError::NotFound("Session not found".into()))?;

        if let Some(team_id) = patch.team_id {
            session.team_id = team_id;
        }
        if let Some(team_name) = patch.team_name {
            session.team_name = team_name;
        }
        if let Some(session_type) = patch.session_type {
            session.session_type = session_type;
        }
        if let Some(start_time) = patch.start_time {
            session.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            session.end_time = end_time;
        }
        if let Some(location) = patch.location {
            session.location = location;
        }
        if let Some(opponent) = patch.opponent {
            session.opponent = opponent;
        }
        if let Some(notes) = patch.notes {
            session.notes = notes;
        }
        if let Some(max_attendees) = patch.max_attendees {
            session.max_attendees = max_attendees;
        }

        // The time window is validated on the merged record so that moving
        // only one endpoint cannot invert it.
        validate_session_type(&session.session_type)?;
        validate_team(session.team_id, &session.team_name)?;
        validate_location(&session.location)?;
        validate_window(session.start_time, session.end_time)?;
        validate_max_attendees(session.max_attendees)?;

        session.updated_at = Utc::now();
        self.sessions.update(&session).await
    }

    /// Deletes the session and, with it, every RSVP that references it.
    /// A second delete of the same id fails with NotFound.
    pub async fn delete_session(&self, id: &str) -> Result<(), AppError> {
        self.sessions.delete(id).await
    }

    pub async fn list_sessions(&self, filter: &SessionFilter) -> Result<Vec<TrainingSession>, AppError> {
        if let Some(session_type) = &filter.session_type {
            validate_session_type(session_type)?;
        }
        self.sessions.list(filter).await
    }

    pub async fn get_session(&self, id: &str) -> Result<TrainingSession, AppError> {
        self.sessions.find_by_id(id).await?
            .ok_or(AppError::NotFound("Session not found".into()))
    }
}

fn validate_session_type(session_type: &str) -> Result<(), AppError> {
    if session_type != SESSION_TYPE_PRACTICE && session_type != SESSION_TYPE_GAME {
        return Err(AppError::Validation(
            "session_type must be either \"practice\" or \"game\"".into(),
        ));
    }
    Ok(())
}

fn validate_team(team_id: i64, team_name: &str) -> Result<(), AppError> {
    if team_id <= 0 {
        return Err(AppError::Validation("team_id must be a positive integer".into()));
    }
    if team_name.trim().is_empty() {
        return Err(AppError::Validation("team_name must not be empty".into()));
    }
    Ok(())
}

fn validate_location(location: &str) -> Result<(), AppError> {
    if location.trim().is_empty() {
        return Err(AppError::Validation("location must not be empty".into()));
    }
    Ok(())
}

fn validate_window(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), AppError> {
    if end <= start {
        return Err(AppError::Validation("end_time must be after start_time".into()));
    }
    if end - start > Duration::hours(MAX_SESSION_HOURS) {
        return Err(AppError::Validation("session duration cannot exceed 8 hours".into()));
    }
    Ok(())
}

fn validate_max_attendees(max_attendees: Option<i32>) -> Result<(), AppError> {
    if let Some(cap) = max_attendees {
        if cap <= 0 {
            return Err(AppError::Validation("max_attendees must be positive".into()));
        }
    }
    Ok(())
}
