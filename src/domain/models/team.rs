use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub age_group: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewTeam {
    pub name: String,
    pub age_group: String,
}
