use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

pub const CONNECTION_PENDING: &str = "pending";
pub const CONNECTION_APPROVED: &str = "approved";
pub const CONNECTION_REJECTED: &str = "rejected";

/// Guardian-to-player link. Only `approved` requests authorize RSVP
/// writes and player-schedule reads for that guardian.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ConnectionRequest {
    pub id: String,
    pub parent_id: String,
    pub player_id: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ConnectionRequest {
    pub fn new(parent_id: String, player_id: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            parent_id,
            player_id,
            status: CONNECTION_PENDING.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
