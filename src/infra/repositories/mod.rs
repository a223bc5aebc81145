pub mod postgres_announcement_repo;
pub mod postgres_auth_repo;
pub mod postgres_connection_repo;
pub mod postgres_player_repo;
pub mod postgres_rsvp_repo;
pub mod postgres_session_repo;
pub mod postgres_team_repo;
pub mod postgres_user_repo;
pub mod sqlite_announcement_repo;
pub mod sqlite_auth_repo;
pub mod sqlite_connection_repo;
pub mod sqlite_player_repo;
pub mod sqlite_rsvp_repo;
pub mod sqlite_session_repo;
pub mod sqlite_team_repo;
pub mod sqlite_user_repo;
