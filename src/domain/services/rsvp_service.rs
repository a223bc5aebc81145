use std::sync::Arc;
use chrono::Utc;
use crate::domain::models::rsvp::{is_valid_rsvp_status, Rsvp};
use crate::domain::ports::{ConnectionRepository, RsvpRepository, SessionRepository};
use crate::error::AppError;

/// Records and queries attendance intent per (session, player) pair.
/// The acting guardian is always passed in explicitly; nothing here reads
/// ambient request state.
pub struct RsvpService {
    sessions: Arc<dyn SessionRepository>,
    rsvps: Arc<dyn RsvpRepository>,
    connections: Arc<dyn ConnectionRepository>,
}

pub struct SubmitRsvpParams {
    pub session_id: String,
    pub player_id: i64,
    pub status: String,
    pub comment: Option<String>,
    pub acting_guardian: String,
}

impl RsvpService {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        rsvps: Arc<dyn RsvpRepository>,
        connections: Arc<dyn ConnectionRepository>,
    ) -> Self {
        Self { sessions, rsvps, connections }
    }

    /// Upserts the (session, player) row: a re-submission overwrites status
    /// and comment and restamps responded_at / responded_by. Last write wins.
    pub async fn submit_rsvp(&self, params: SubmitRsvpParams) -> Result<Rsvp, AppError> {
        if !is_valid_rsvp_status(&params.status) {
            return Err(AppError::Validation("status must be one of: going, maybe, no".into()));
        }

        let session = self.sessions.find_by_id(&params.session_id).await?
            .ok_or(AppError::NotFound("Session not found".into()))?;

        if session.end_time <= Utc::now() {
            return Err(AppError::PastEvent("Cannot change the RSVP for a session that has ended".into()));
        }

        let authorized = self.connections
            .has_approved(&params.acting_guardian, params.player_id)
            .await?;
        if !authorized {
            return Err(AppError::Forbidden("Not authorized to RSVP for this player".into()));
        }

        let rsvp = Rsvp::new(
            params.session_id,
            params.player_id,
            params.status,
            params.comment,
            params.acting_guardian,
        );
        self.rsvps.upsert(&rsvp).await
    }

    /// All RSVP rows for one session, for the admin attendance summary.
    /// An unknown session id is a NotFound, not an empty list.
    pub async fn list_rsvps_for_session(&self, session_id: &str) -> Result<Vec<Rsvp>, AppError> {
        if self.sessions.find_by_id(session_id).await?.is_none() {
            return Err(AppError::NotFound("Session not found".into()));
        }
        self.rsvps.list_by_session(session_id).await
    }

    /// The guardian's own players' rows, restricted to the given sessions.
    pub async fn list_rsvps_for_guardian(
        &self,
        guardian_id: &str,
        session_ids: &[String],
    ) -> Result<Vec<Rsvp>, AppError> {
        if session_ids.is_empty() {
            return Ok(Vec::new());
        }
        self.rsvps.list_for_guardian(guardian_id, session_ids).await
    }
}
