use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

pub const RSVP_GOING: &str = "going";
pub const RSVP_MAYBE: &str = "maybe";
pub const RSVP_NO: &str = "no";

pub fn is_valid_rsvp_status(status: &str) -> bool {
    matches!(status, RSVP_GOING | RSVP_MAYBE | RSVP_NO)
}

/// One attendance intent per (session, player) pair. Re-submissions
/// overwrite the existing row.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Rsvp {
    pub id: String,
    pub session_id: String,
    pub player_id: i64,
    pub status: String,
    pub comment: Option<String>,
    pub responded_by: String,
    pub responded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Rsvp {
    pub fn new(
        session_id: String,
        player_id: i64,
        status: String,
        comment: Option<String>,
        responded_by: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            session_id,
            player_id,
            status,
            comment,
            responded_by,
            responded_at: now,
            created_at: now,
        }
    }
}

/// Per-session attendance summary for the admin console.
#[derive(Debug, Serialize)]
pub struct RsvpCounts {
    pub going: i64,
    pub maybe: i64,
    pub no: i64,
}

impl RsvpCounts {
    pub fn tally(rows: &[Rsvp]) -> Self {
        let mut counts = Self { going: 0, maybe: 0, no: 0 };
        for row in rows {
            match row.status.as_str() {
                RSVP_GOING => counts.going += 1,
                RSVP_MAYBE => counts.maybe += 1,
                RSVP_NO => counts.no += 1,
                _ => {}
            }
        }
        counts
    }
}
