//! PostgreSQL implementation of UpdateRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use relief_core::entities::Update;
use relief_core::traits::{RepoResult, UpdateRepository};

use crate::models::UpdateModel;

use super::error::map_db_error;

/// PostgreSQL implementation of UpdateRepository
#[derive(Clone)]
pub struct PgUpdateRepository {
    pool: PgPool,
}

impl PgUpdateRepository {
    /// Create a new PgUpdateRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UpdateRepository for PgUpdateRepository {
    #[instrument(skip(self))]
    async fn find_by_portal(&self, portal_id: Uuid) -> RepoResult<Vec<Update>> {
        let results = sqlx::query_as::<_, UpdateModel>(
            r"
            SELECT id, portal_id, title, content, created_by, is_resolution, created_at
            FROM updates
            WHERE portal_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(portal_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Update::try_from).collect()
    }

    #[instrument(skip(self, update))]
    async fn create(&self, update: &Update) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO updates (id, portal_id, title, content, created_by, is_resolution,
                                 created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(update.id)
        .bind(update.portal_id)
        .bind(&update.title)
        .bind(&update.content)
        .bind(&update.created_by)
        .bind(update.is_resolution)
        .bind(update.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgUpdateRepository>();
    }
}
