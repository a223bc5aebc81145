use crate::domain::{models::team::{NewTeam, Team}, ports::TeamRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

pub struct PostgresTeamRepo {
    pool: PgPool,
}

impl PostgresTeamRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepo {
    async fn create(&self, team: &NewTeam) -> Result<Team, AppError> {
        sqlx::query_as::<_, Team>(
            r#"INSERT INTO teams (name, age_group, created_at)
               VALUES ($1, $2, $3)
               RETURNING *"#
        )
            .bind(&team.name)
            .bind(&team.age_group)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Team>, AppError> {
        sqlx::query_as::<_, Team>(
            "SELECT * FROM teams WHERE id = $1"
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Team>, AppError> {
        sqlx::query_as::<_, Team>(
            "SELECT * FROM teams ORDER BY name ASC"
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
