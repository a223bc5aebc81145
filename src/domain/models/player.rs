use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Player {
    pub id: i64,
    pub full_name: String,
    pub team_id: i64,
    pub created_at: DateTime<Utc>,
}

pub struct NewPlayer {
    pub full_name: String,
    pub team_id: i64,
}
