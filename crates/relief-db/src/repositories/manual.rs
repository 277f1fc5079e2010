//! PostgreSQL implementation of ManualRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use relief_core::entities::{DisasterType, Manual, PortalManualLink};
use relief_core::error::DomainError;
use relief_core::traits::{ManualRepository, RepoResult};

use crate::models::{ManualModel, PortalManualModel};

use super::error::map_db_error;

const MANUAL_COLUMNS: &str = "id, disaster_type, title, content, sections, for_victims, \
     for_helpers, created_by, created_at, last_updated";

/// PostgreSQL implementation of ManualRepository
#[derive(Clone)]
pub struct PgManualRepository {
    pool: PgPool,
}

impl PgManualRepository {
    /// Create a new PgManualRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn collect(models: Vec<ManualModel>) -> RepoResult<Vec<Manual>> {
        models.into_iter().map(Manual::try_from).collect()
    }
}

#[async_trait]
impl ManualRepository for PgManualRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Manual>> {
        let result = sqlx::query_as::<_, ManualModel>(&format!(
            "SELECT {MANUAL_COLUMNS} FROM manuals WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Manual::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Manual>> {
        // Fixture rows seeded during testing are hidden from listings.
        let results = sqlx::query_as::<_, ManualModel>(&format!(
            "SELECT {MANUAL_COLUMNS} FROM manuals \
             WHERE title NOT ILIKE '%test%' \
             ORDER BY last_updated DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Self::collect(results)
    }

    #[instrument(skip(self))]
    async fn find_by_type(&self, disaster_type: DisasterType) -> RepoResult<Vec<Manual>> {
        let results = sqlx::query_as::<_, ManualModel>(&format!(
            "SELECT {MANUAL_COLUMNS} FROM manuals \
             WHERE disaster_type = $1 AND title NOT ILIKE '%test%' \
             ORDER BY last_updated DESC"
        ))
        .bind(disaster_type.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Self::collect(results)
    }

    #[instrument(skip(self, manual))]
    async fn create(&self, manual: &Manual) -> RepoResult<()> {
        let sections = serde_json::to_value(&manual.sections)
            .map_err(|e| DomainError::InternalError(format!("serialize manual sections: {e}")))?;

        sqlx::query(
            r"
            INSERT INTO manuals (id, disaster_type, title, content, sections, for_victims,
                                 for_helpers, created_by, created_at, last_updated)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(manual.id)
        .bind(manual.disaster_type.as_str())
        .bind(&manual.title)
        .bind(&manual.content)
        .bind(sections)
        .bind(manual.for_victims)
        .bind(manual.for_helpers)
        .bind(&manual.created_by)
        .bind(manual.created_at)
        .bind(manual.last_updated)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, link))]
    async fn create_link(&self, link: &PortalManualLink) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO portal_manuals (id, portal_id, manual_id, disaster_type, attached_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(link.id)
        .bind(link.portal_id)
        .bind(link.manual_id)
        .bind(link.disaster_type.as_str())
        .bind(link.attached_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_links_by_portal(&self, portal_id: Uuid) -> RepoResult<Vec<PortalManualLink>> {
        let results = sqlx::query_as::<_, PortalManualModel>(
            r"
            SELECT id, portal_id, manual_id, disaster_type, attached_at
            FROM portal_manuals
            WHERE portal_id = $1
            ORDER BY attached_at ASC
            ",
        )
        .bind(portal_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(PortalManualLink::try_from).collect()
    }
}
