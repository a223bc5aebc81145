use crate::domain::{
    models::connection::{ConnectionRequest, CONNECTION_APPROVED},
    ports::ConnectionRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct SqliteConnectionRepo {
    pool: SqlitePool,
}

impl SqliteConnectionRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConnectionRepository for SqliteConnectionRepo {
    async fn create(&self, request: &ConnectionRequest) -> Result<ConnectionRequest, AppError> {
        sqlx::query_as::<_, ConnectionRequest>(
            r#"INSERT INTO connection_requests (id, parent_id, player_id, status, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&request.id)
            .bind(&request.parent_id)
            .bind(request.player_id)
            .bind(&request.status)
            .bind(request.created_at)
            .bind(request.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ConnectionRequest>, AppError> {
        sqlx::query_as::<_, ConnectionRequest>(
            "SELECT * FROM connection_requests WHERE id = ?"
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_live_by_pair(&self, parent_id: &str, player_id: i64) -> Result<Option<ConnectionRequest>, AppError> {
        sqlx::query_as::<_, ConnectionRequest>(
            r#"SELECT * FROM connection_requests
               WHERE parent_id = ? AND player_id = ? AND status IN ('pending', 'approved')"#
        )
            .bind(parent_id)
            .bind(player_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_parent(&self, parent_id: &str) -> Result<Vec<ConnectionRequest>, AppError> {
        sqlx::query_as::<_, ConnectionRequest>(
            "SELECT * FROM connection_requests WHERE parent_id = ? ORDER BY created_at DESC"
        )
            .bind(parent_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_status(&self, status: &str) -> Result<Vec<ConnectionRequest>, AppError> {
        sqlx::query_as::<_, ConnectionRequest>(
            "SELECT * FROM connection_requests WHERE status = ? ORDER BY created_at ASC"
        )
            .bind(status)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<ConnectionRequest, AppError> {
        sqlx::query_as::<_, ConnectionRequest>(
            r#"UPDATE connection_requests SET status = ?, updated_at = ? WHERE id = ? RETURNING *"#
        )
            .bind(status)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Connection request not found".into()))
    }

    async fn has_approved(&self, parent_id: &str, player_id: i64) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM connection_requests WHERE parent_id = ? AND player_id = ? AND status = ?"
        )
            .bind(parent_id)
            .bind(player_id)
            .bind(CONNECTION_APPROVED)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(count > 0)
    }
}
