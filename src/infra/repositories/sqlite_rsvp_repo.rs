use crate::domain::{models::rsvp::Rsvp, ports::RsvpRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

pub struct SqliteRsvpRepo {
    pool: SqlitePool,
}

impl SqliteRsvpRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RsvpRepository for SqliteRsvpRepo {
    async fn upsert(&self, rsvp: &Rsvp) -> Result<Rsvp, AppError> {
        // The unique (session_id, player_id) index makes a re-submission an
        // in-place overwrite; id and created_at of the original row survive.
        sqlx::query_as::<_, Rsvp>(
            r#"INSERT INTO rsvps (id, session_id, player_id, status, comment, responded_by, responded_at, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)
               ON CONFLICT(session_id, player_id) DO UPDATE SET
                   status = excluded.status,
                   comment = excluded.comment,
                   responded_by = excluded.responded_by,
                   responded_at = excluded.responded_at
               RETURNING *"#
        )
            .bind(&rsvp.id)
            .bind(&rsvp.session_id)
            .bind(rsvp.player_id)
            .bind(&rsvp.status)
            .bind(&rsvp.comment)
            .bind(&rsvp.responded_by)
            .bind(rsvp.responded_at)
            .bind(rsvp.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_session(&self, session_id: &str) -> Result<Vec<Rsvp>, AppError> {
        sqlx::query_as::<_, Rsvp>(
            "SELECT * FROM rsvps WHERE session_id = ? ORDER BY responded_at ASC"
        )
            .bind(session_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_for_guardian(&self, parent_id: &str, session_ids: &[String]) -> Result<Vec<Rsvp>, AppError> {
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
            r#"SELECT r.* FROM rsvps r
               JOIN connection_requests c
                 ON c.player_id = r.player_id AND c.status = 'approved'
               WHERE c.parent_id = "#
        );
        qb.push_bind(parent_id);
        qb.push(" AND r.session_id IN (");
        let mut separated = qb.separated(", ");
        for session_id in session_ids {
            separated.push_bind(session_id);
        }
        qb.push(") ORDER BY r.responded_at ASC");

        qb.build_query_as::<Rsvp>()
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
