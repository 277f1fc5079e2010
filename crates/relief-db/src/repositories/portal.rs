//! PostgreSQL implementation of PortalRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use relief_core::entities::{Portal, PortalStatus, ResourceNeed, Update};
use relief_core::traits::{CascadeSummary, PortalRepository, PortalStats, RepoResult};

use crate::models::{PortalModel, ResourceNeedModel};

use super::error::{escape_like, map_db_error, portal_not_found};

const PORTAL_COLUMNS: &str = "id, title, description, location, urgency, disaster_type, image, \
     created_by, status, resolution_summary, created_at, resolved_at, last_updated";

/// PostgreSQL implementation of PortalRepository
#[derive(Clone)]
pub struct PgPortalRepository {
    pool: PgPool,
}

impl PgPortalRepository {
    /// Create a new PgPortalRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn collect(models: Vec<PortalModel>) -> RepoResult<Vec<Portal>> {
        models.into_iter().map(Portal::try_from).collect()
    }
}

#[async_trait]
impl PortalRepository for PgPortalRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Portal>> {
        let result = sqlx::query_as::<_, PortalModel>(&format!(
            "SELECT {PORTAL_COLUMNS} FROM portals WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Portal::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_active(&self) -> RepoResult<Vec<Portal>> {
        let results = sqlx::query_as::<_, PortalModel>(&format!(
            "SELECT {PORTAL_COLUMNS} FROM portals WHERE status = 'active' ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Self::collect(results)
    }

    #[instrument(skip(self))]
    async fn find_by_creator(&self, uid: &str) -> RepoResult<Vec<Portal>> {
        let results = sqlx::query_as::<_, PortalModel>(&format!(
            "SELECT {PORTAL_COLUMNS} FROM portals WHERE created_by = $1 ORDER BY created_at DESC"
        ))
        .bind(uid)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Self::collect(results)
    }

    #[instrument(skip(self))]
    async fn search(&self, term: &str) -> RepoResult<Vec<Portal>> {
        let pattern = format!("%{}%", escape_like(term));

        let results = sqlx::query_as::<_, PortalModel>(&format!(
            "SELECT {PORTAL_COLUMNS} FROM portals \
             WHERE status = 'active' \
               AND (title ILIKE $1 OR description ILIKE $1 OR location ILIKE $1) \
             ORDER BY created_at DESC"
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Self::collect(results)
    }

    #[instrument(skip(self, portal))]
    async fn create(&self, portal: &Portal) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO portals (id, title, description, location, urgency, disaster_type, image,
                                 created_by, status, resolution_summary, created_at, resolved_at,
                                 last_updated)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ",
        )
        .bind(portal.id)
        .bind(&portal.title)
        .bind(&portal.description)
        .bind(&portal.location)
        .bind(portal.urgency.as_str())
        .bind(portal.disaster_type.as_str())
        .bind(&portal.image)
        .bind(&portal.created_by)
        .bind(portal.status.as_str())
        .bind(&portal.resolution_summary)
        .bind(portal.created_at)
        .bind(portal.resolved_at)
        .bind(portal.last_updated)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, portal))]
    async fn update(&self, portal: &Portal) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE portals
            SET title = $2, description = $3, location = $4, urgency = $5, disaster_type = $6,
                image = $7, status = $8, resolution_summary = $9, resolved_at = $10,
                last_updated = NOW()
            WHERE id = $1
            ",
        )
        .bind(portal.id)
        .bind(&portal.title)
        .bind(&portal.description)
        .bind(&portal.location)
        .bind(portal.urgency.as_str())
        .bind(portal.disaster_type.as_str())
        .bind(&portal.image)
        .bind(portal.status.as_str())
        .bind(&portal.resolution_summary)
        .bind(portal.resolved_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(portal_not_found(portal.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_status(&self, id: Uuid, status: PortalStatus) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE portals
            SET status = $2, last_updated = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(portal_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self, update))]
    async fn resolve(&self, id: Uuid, summary: Option<&str>, update: &Update) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE portals
            SET status = 'resolved', resolution_summary = $2, resolved_at = NOW(),
                last_updated = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(summary)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(portal_not_found(id));
        }

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
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_cascade(&self, id: Uuid) -> RepoResult<CascadeSummary> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Comments first since they hang off posts, then everything that
        // references the portal row directly.
        let comments = sqlx::query(
            r"
            DELETE FROM forum_comments
            WHERE post_id IN (SELECT id FROM forum_posts WHERE portal_id = $1)
            ",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected();

        let posts = sqlx::query("DELETE FROM forum_posts WHERE portal_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?
            .rows_affected();

        let resources = sqlx::query("DELETE FROM resource_needs WHERE portal_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?
            .rows_affected();

        let volunteers = sqlx::query("DELETE FROM volunteers WHERE portal_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?
            .rows_affected();

        let updates = sqlx::query("DELETE FROM updates WHERE portal_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?
            .rows_affected();

        let manual_links = sqlx::query("DELETE FROM portal_manuals WHERE portal_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?
            .rows_affected();

        let portal = sqlx::query("DELETE FROM portals WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if portal.rows_affected() == 0 {
            return Err(portal_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(CascadeSummary {
            resources,
            volunteers,
            updates,
            posts,
            comments,
            manual_links,
        })
    }

    #[instrument(skip(self))]
    async fn stats(&self, id: Uuid) -> RepoResult<PortalStats> {
        let volunteers = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM volunteers WHERE portal_id = $1
            ",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        // Fulfilled quantities follow the half-credit rule for partial
        // needs, so the rows are folded in Rust instead of SQL.
        let rows = sqlx::query_as::<_, ResourceNeedModel>(
            r"
            SELECT id, portal_id, title, description, category, quantity, unit, priority,
                   status, created_at
            FROM resource_needs
            WHERE portal_id = $1
            ",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let needs: Vec<ResourceNeed> = rows
            .into_iter()
            .map(ResourceNeed::try_from)
            .collect::<RepoResult<_>>()?;

        let mut stats = PortalStats {
            volunteers,
            resource_needs: needs.len() as i64,
            ..PortalStats::default()
        };
        for need in &needs {
            stats.total_resources += need.quantity;
            stats.resources_fulfilled += need.fulfilled_quantity();
        }

        Ok(stats)
    }
}
