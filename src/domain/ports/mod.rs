use crate::domain::models::{
    announcement::Announcement,
    auth::RefreshTokenRecord,
    connection::ConnectionRequest,
    player::{NewPlayer, Player},
    rsvp::Rsvp,
    session::{SessionFilter, TrainingSession},
    team::{NewTeam, Team},
    user::User,
};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn create_refresh_token(&self, record: &RefreshTokenRecord) -> Result<(), AppError>;
    async fn find_refresh_token(&self, token_hash: &str) -> Result<Option<RefreshTokenRecord>, AppError>;
    async fn delete_refresh_token(&self, token_hash: &str) -> Result<(), AppError>;
    async fn delete_refresh_family(&self, family_id: Uuid) -> Result<(), AppError>;
}

#[async_trait]
pub trait TeamRepository: Send + Sync {
    async fn create(&self, team: &NewTeam) -> Result<Team, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Team>, AppError>;
    async fn list(&self) -> Result<Vec<Team>, AppError>;
}

#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn create(&self, player: &NewPlayer) -> Result<Player, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Player>, AppError>;
    async fn list(&self) -> Result<Vec<Player>, AppError>;
    async fn list_by_team(&self, team_id: i64) -> Result<Vec<Player>, AppError>;
}

#[async_trait]
pub trait ConnectionRepository: Send + Sync {
    async fn create(&self, request: &ConnectionRequest) -> Result<ConnectionRequest, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<ConnectionRequest>, AppError>;
    async fn find_live_by_pair(&self, parent_id: &str, player_id: i64) -> Result<Option<ConnectionRequest>, AppError>;
    async fn list_by_parent(&self, parent_id: &str) -> Result<Vec<ConnectionRequest>, AppError>;
    async fn list_by_status(&self, status: &str) -> Result<Vec<ConnectionRequest>, AppError>;
    async fn update_status(&self, id: &str, status: &str) -> Result<ConnectionRequest, AppError>;
    async fn has_approved(&self, parent_id: &str, player_id: i64) -> Result<bool, AppError>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: &TrainingSession) -> Result<TrainingSession, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<TrainingSession>, AppError>;
    async fn list(&self, filter: &SessionFilter) -> Result<Vec<TrainingSession>, AppError>;
    async fn update(&self, session: &TrainingSession) -> Result<TrainingSession, AppError>;
    /// Deletes the session and its RSVP rows in one transaction.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait RsvpRepository: Send + Sync {
    async fn upsert(&self, rsvp: &Rsvp) -> Result<Rsvp, AppError>;
    async fn list_by_session(&self, session_id: &str) -> Result<Vec<Rsvp>, AppError>;
    /// RSVP rows for the guardian's approved players, restricted to the
    /// given session ids.
    async fn list_for_guardian(&self, parent_id: &str, session_ids: &[String]) -> Result<Vec<Rsvp>, AppError>;
}

#[async_trait]
pub trait AnnouncementRepository: Send + Sync {
    async fn create(&self, announcement: &Announcement) -> Result<Announcement, AppError>;
    async fn list_recent(&self, limit: i64) -> Result<Vec<Announcement>, AppError>;
}
