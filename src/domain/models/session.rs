use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

pub const SESSION_TYPE_PRACTICE: &str = "practice";
pub const SESSION_TYPE_GAME: &str = "game";

/// A scheduled practice or game for one team. `team_name` is denormalized
/// for display; `team_id` is authoritative.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct TrainingSession {
    pub id: String,
    pub team_id: i64,
    pub team_name: String,
    pub session_type: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    pub opponent: Option<String>,
    pub notes: Option<String>,
    pub max_attendees: Option<i32>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewSessionParams {
    pub team_id: i64,
    pub team_name: String,
    pub session_type: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    pub opponent: Option<String>,
    pub notes: Option<String>,
    pub max_attendees: Option<i32>,
    pub created_by: String,
}

impl TrainingSession {
    pub fn new(params: NewSessionParams) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            team_id: params.team_id,
            team_name: params.team_name,
            session_type: params.session_type,
            start_time: params.start_time,
            end_time: params.end_time,
            location: params.location,
            opponent: params.opponent,
            notes: params.notes,
            max_attendees: params.max_attendees,
            created_by: params.created_by,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Optional bounds for the session list query. `from`/`to` both apply to
/// `start_time`.
#[derive(Debug, Default, Clone)]
pub struct SessionFilter {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub team_id: Option<i64>,
    pub session_type: Option<String>,
}

/// Admin edit payload. Only provided fields are touched.
#[derive(Debug, Default)]
pub struct SessionPatch {
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
    pub session_type: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub opponent: Option<Option<String>>,
    pub notes: Option<Option<String>>,
    pub max_attendees: Option<Option<i32>>,
}
