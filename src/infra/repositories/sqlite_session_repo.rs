use crate::domain::{
    models::session::{SessionFilter, TrainingSession},
    ports::SessionRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteSessionRepo {
    pool: SqlitePool,
}

impl SqliteSessionRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepo {
    async fn create(&self, session: &TrainingSession) -> Result<TrainingSession, AppError> {
        sqlx::query_as::<_, TrainingSession>(
            r#"INSERT INTO training_sessions (id, team_id, team_name, session_type, start_time, end_time, location, opponent, notes, max_attendees, created_by, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&session.id)
            .bind(session.team_id)
            .bind(&session.team_name)
            .bind(&session.session_type)
            .bind(session.start_time)
            .bind(session.end_time)
            .bind(&session.location)
            .bind(&session.opponent)
            .bind(&session.notes)
            .bind(session.max_attendees)
            .bind(&session.created_by)
            .bind(session.created_at)
            .bind(session.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<TrainingSession>, AppError> {
        sqlx::query_as::<_, TrainingSession>(
            "SELECT * FROM training_sessions WHERE id = ?"
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, filter: &SessionFilter) -> Result<Vec<TrainingSession>, AppError> {
        sqlx::query_as::<_, TrainingSession>(
            r#"SELECT * FROM training_sessions
               WHERE (?1 IS NULL OR start_time >= ?1)
                 AND (?2 IS NULL OR start_time <= ?2)
                 AND (?3 IS NULL OR team_id = ?3)
                 AND (?4 IS NULL OR session_type = ?4)
               ORDER BY start_time ASC"#
        )
            .bind(filter.from)
            .bind(filter.to)
            .bind(filter.team_id)
            .bind(&filter.session_type)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, session: &TrainingSession) -> Result<TrainingSession, AppError> {
        sqlx::query_as::<_, TrainingSession>(
            r#"UPDATE training_sessions
               SET team_id=?, team_name=?, session_type=?, start_time=?, end_time=?, location=?, opponent=?, notes=?, max_attendees=?, updated_at=?
               WHERE id=? RETURNING *"#
        )
            .bind(session.team_id)
            .bind(&session.team_name)
            .bind(&session.session_type)
            .bind(session.start_time)
            .bind(session.end_time)
            .bind(&session.location)
            .bind(&session.opponent)
            .bind(&session.notes)
            .bind(session.max_attendees)
            .bind(session.updated_at)
            .bind(&session.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query("DELETE FROM rsvps WHERE session_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        let result = sqlx::query("DELETE FROM training_sessions WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Session not found".into()));
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(())
    }
}
