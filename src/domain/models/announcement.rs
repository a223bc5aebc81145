use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub body: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl Announcement {
    pub fn new(title: String, body: String, created_by: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            body,
            created_by,
            created_at: Utc::now(),
        }
    }
}
