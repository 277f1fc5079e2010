//! PostgreSQL implementation of ResourceRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use relief_core::entities::ResourceNeed;
use relief_core::traits::{RepoResult, ResourceRepository};

use crate::models::ResourceNeedModel;

use super::error::{map_db_error, resource_not_found};

const RESOURCE_COLUMNS: &str =
    "id, portal_id, title, description, category, quantity, unit, priority, status, created_at";

/// PostgreSQL implementation of ResourceRepository
#[derive(Clone)]
pub struct PgResourceRepository {
    pool: PgPool,
}

impl PgResourceRepository {
    /// Create a new PgResourceRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn collect(models: Vec<ResourceNeedModel>) -> RepoResult<Vec<ResourceNeed>> {
        models.into_iter().map(ResourceNeed::try_from).collect()
    }
}

#[async_trait]
impl ResourceRepository for PgResourceRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ResourceNeed>> {
        let result = sqlx::query_as::<_, ResourceNeedModel>(&format!(
            "SELECT {RESOURCE_COLUMNS} FROM resource_needs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(ResourceNeed::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_portal(&self, portal_id: Uuid) -> RepoResult<Vec<ResourceNeed>> {
        // Priority is stored as TEXT, so ordering goes through an explicit rank.
        let results = sqlx::query_as::<_, ResourceNeedModel>(&format!(
            "SELECT {RESOURCE_COLUMNS} FROM resource_needs \
             WHERE portal_id = $1 \
             ORDER BY CASE priority WHEN 'high' THEN 2 WHEN 'medium' THEN 1 ELSE 0 END DESC, \
                      created_at DESC"
        ))
        .bind(portal_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Self::collect(results)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<ResourceNeed>> {
        let results = sqlx::query_as::<_, ResourceNeedModel>(&format!(
            "SELECT {RESOURCE_COLUMNS} FROM resource_needs ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Self::collect(results)
    }

    #[instrument(skip(self, resource))]
    async fn create(&self, resource: &ResourceNeed) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO resource_needs (id, portal_id, title, description, category, quantity,
                                        unit, priority, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(resource.id)
        .bind(resource.portal_id)
        .bind(&resource.title)
        .bind(&resource.description)
        .bind(resource.category.as_str())
        .bind(resource.quantity)
        .bind(&resource.unit)
        .bind(resource.priority.as_str())
        .bind(resource.status.as_str())
        .bind(resource.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, resource))]
    async fn update(&self, resource: &ResourceNeed) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE resource_needs
            SET title = $2, description = $3, category = $4, quantity = $5, unit = $6,
                priority = $7, status = $8
            WHERE id = $1
            ",
        )
        .bind(resource.id)
        .bind(&resource.title)
        .bind(&resource.description)
        .bind(resource.category.as_str())
        .bind(resource.quantity)
        .bind(&resource.unit)
        .bind(resource.priority.as_str())
        .bind(resource.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(resource_not_found(resource.id));
        }

        Ok(())
    }
}
