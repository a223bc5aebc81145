use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub age_group: String,
}

#[derive(Deserialize)]
pub struct CreatePlayerRequest {
    pub full_name: String,
    pub team_id: i64,
}

#[derive(Deserialize)]
pub struct CreateConnectionRequest {
    pub player_id: i64,
}

#[derive(Deserialize)]
pub struct ReviewConnectionRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct CreateSessionRequest {
    pub session_type: String,
    pub team_id: i64,
    pub team_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    pub opponent: Option<String>,
    pub notes: Option<String>,
    pub max_attendees: Option<i32>,
}

#[derive(Deserialize)]
pub struct UpdateSessionRequest {
    pub session_type: Option<String>,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub opponent: Option<String>,
    pub notes: Option<String>,
    pub max_attendees: Option<i32>,
}

#[derive(Deserialize)]
pub struct SubmitRsvpRequest {
    pub session_id: String,
    pub player_id: i64,
    pub status: String,
    pub comment: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub body: String,
}

#[derive(Deserialize)]
pub struct SessionListQuery {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub team_id: Option<i64>,
    #[serde(rename = "type")]
    pub session_type: Option<String>,
}

#[derive(Deserialize)]
pub struct ConnectionListQuery {
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct MyRsvpsQuery {
    /// Comma-separated session ids.
    pub session_ids: String,
}
