use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use argon2::{password_hash::{PasswordHasher, SaltString}, Argon2};
use rand::rngs::OsRng;
use sqlx::{postgres::{PgConnectOptions, PgPoolOptions}, sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions}};
use sqlx::{ConnectOptions, PgPool, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::models::user::{User, ROLE_ADMIN};
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::rsvp_service::RsvpService;
use crate::domain::services::scheduling::SchedulingService;
use crate::state::AppState;
use crate::infra::repositories::{
    postgres_announcement_repo::PostgresAnnouncementRepo, postgres_auth_repo::PostgresAuthRepo,
    postgres_connection_repo::PostgresConnectionRepo, postgres_player_repo::PostgresPlayerRepo,
    postgres_rsvp_repo::PostgresRsvpRepo, postgres_session_repo::PostgresSessionRepo,
    postgres_team_repo::PostgresTeamRepo, postgres_user_repo::PostgresUserRepo,
    sqlite_announcement_repo::SqliteAnnouncementRepo, sqlite_auth_repo::SqliteAuthRepo,
    sqlite_connection_repo::SqliteConnectionRepo, sqlite_player_repo::SqlitePlayerRepo,
    sqlite_rsvp_repo::SqliteRsvpRepo, sqlite_session_repo::SqliteSessionRepo,
    sqlite_team_repo::SqliteTeamRepo, sqlite_user_repo::SqliteUserRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    let state = if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        let auth_repo = Arc::new(PostgresAuthRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(auth_repo.clone(), config.clone()));

        let session_repo = Arc::new(PostgresSessionRepo::new(pool.clone()));
        let rsvp_repo = Arc::new(PostgresRsvpRepo::new(pool.clone()));
        let connection_repo = Arc::new(PostgresConnectionRepo::new(pool.clone()));

        AppState {
            config: config.clone(),
            user_repo: Arc::new(PostgresUserRepo::new(pool.clone())),
            auth_repo,
            team_repo: Arc::new(PostgresTeamRepo::new(pool.clone())),
            player_repo: Arc::new(PostgresPlayerRepo::new(pool.clone())),
            connection_repo: connection_repo.clone(),
            session_repo: session_repo.clone(),
            rsvp_repo: rsvp_repo.clone(),
            announcement_repo: Arc::new(PostgresAnnouncementRepo::new(pool.clone())),
            auth_service,
            scheduling_service: Arc::new(SchedulingService::new(session_repo.clone())),
            rsvp_service: Arc::new(RsvpService::new(session_repo, rsvp_repo, connection_repo)),
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        let auth_repo = Arc::new(SqliteAuthRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(auth_repo.clone(), config.clone()));

        let session_repo = Arc::new(SqliteSessionRepo::new(pool.clone()));
        let rsvp_repo = Arc::new(SqliteRsvpRepo::new(pool.clone()));
        let connection_repo = Arc::new(SqliteConnectionRepo::new(pool.clone()));

        AppState {
            config: config.clone(),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            auth_repo,
            team_repo: Arc::new(SqliteTeamRepo::new(pool.clone())),
            player_repo: Arc::new(SqlitePlayerRepo::new(pool.clone())),
            connection_repo: connection_repo.clone(),
            session_repo: session_repo.clone(),
            rsvp_repo: rsvp_repo.clone(),
            announcement_repo: Arc::new(SqliteAnnouncementRepo::new(pool.clone())),
            auth_service,
            scheduling_service: Arc::new(SchedulingService::new(session_repo.clone())),
            rsvp_service: Arc::new(RsvpService::new(session_repo, rsvp_repo, connection_repo)),
        }
    };

    seed_admin_account(&state).await;

    state
}

/// Creates the academy admin account from config on first start.
async fn seed_admin_account(state: &AppState) {
    let existing = state.user_repo
        .find_by_email(&state.config.admin_email)
        .await
        .expect("Failed to look up admin account");

    if existing.is_some() {
        return;
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(state.config.admin_password.as_bytes(), &salt)
        .expect("Failed to hash admin password")
        .to_string();

    let admin = User::new(
        state.config.admin_email.clone(),
        "Academy Admin".to_string(),
        password_hash,
        ROLE_ADMIN,
    );

    state.user_repo.create(&admin).await.expect("Failed to seed admin account");
    info!("Seeded admin account: {}", admin.email);
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
