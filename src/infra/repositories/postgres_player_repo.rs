use crate::domain::{models::player::{NewPlayer, Player}, ports::PlayerRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

pub struct PostgresPlayerRepo {
    pool: PgPool,
}

impl PostgresPlayerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerRepository for PostgresPlayerRepo {
    async fn create(&self, player: &NewPlayer) -> Result<Player, AppError> {
        sqlx::query_as::<_, Player>(
            r#"INSERT INTO players (full_name, team_id, created_at)
               VALUES ($1, $2, $3)
               RETURNING *"#
        )
            .bind(&player.full_name)
            .bind(player.team_id)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Player>, AppError> {
        sqlx::query_as::<_, Player>(
            "SELECT * FROM players WHERE id = $1"
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Player>, AppError> {
        sqlx::query_as::<_, Player>(
            "SELECT * FROM players ORDER BY full_name ASC"
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_team(&self, team_id: i64) -> Result<Vec<Player>, AppError> {
        sqlx::query_as::<_, Player>(
            "SELECT * FROM players WHERE team_id = $1 ORDER BY full_name ASC"
        )
            .bind(team_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
