use std::sync::Arc;
use crate::domain::ports::{
    AnnouncementRepository, AuthRepository, ConnectionRepository, PlayerRepository,
    RsvpRepository, SessionRepository, TeamRepository, UserRepository,
};
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::rsvp_service::RsvpService;
use crate::domain::services::scheduling::SchedulingService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub auth_repo: Arc<dyn AuthRepository>,
    pub team_repo: Arc<dyn TeamRepository>,
    pub player_repo: Arc<dyn PlayerRepository>,
    pub connection_repo: Arc<dyn ConnectionRepository>,
    pub session_repo: Arc<dyn SessionRepository>,
    pub rsvp_repo: Arc<dyn RsvpRepository>,
    pub announcement_repo: Arc<dyn AnnouncementRepository>,
    pub auth_service: Arc<AuthService>,
    pub scheduling_service: Arc<SchedulingService>,
    pub rsvp_service: Arc<RsvpService>,
}
