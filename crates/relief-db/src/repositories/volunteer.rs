//! PostgreSQL implementation of VolunteerRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use relief_core::entities::Volunteer;
use relief_core::error::DomainError;
use relief_core::traits::{RepoResult, VolunteerRepository};

use crate::models::VolunteerModel;

use super::error::{map_db_error, map_unique_violation};

const VOLUNTEER_COLUMNS: &str =
    "id, portal_id, user_id, name, email, phone, skills, availability, status, registered_at";

/// PostgreSQL implementation of VolunteerRepository
#[derive(Clone)]
pub struct PgVolunteerRepository {
    pool: PgPool,
}

impl PgVolunteerRepository {
    /// Create a new PgVolunteerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn collect(models: Vec<VolunteerModel>) -> RepoResult<Vec<Volunteer>> {
        models.into_iter().map(Volunteer::try_from).collect()
    }
}

#[async_trait]
impl VolunteerRepository for PgVolunteerRepository {
    #[instrument(skip(self))]
    async fn find_by_portal(&self, portal_id: Uuid) -> RepoResult<Vec<Volunteer>> {
        let results = sqlx::query_as::<_, VolunteerModel>(&format!(
            "SELECT {VOLUNTEER_COLUMNS} FROM volunteers \
             WHERE portal_id = $1 ORDER BY registered_at DESC"
        ))
        .bind(portal_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Self::collect(results)
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: &str) -> RepoResult<Vec<Volunteer>> {
        let results = sqlx::query_as::<_, VolunteerModel>(&format!(
            "SELECT {VOLUNTEER_COLUMNS} FROM volunteers \
             WHERE user_id = $1 ORDER BY registered_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Self::collect(results)
    }

    #[instrument(skip(self))]
    async fn is_registered(&self, portal_id: Uuid, user_id: &str) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS (
                SELECT 1 FROM volunteers WHERE portal_id = $1 AND user_id = $2
            )
            ",
        )
        .bind(portal_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self, volunteer))]
    async fn create(&self, volunteer: &Volunteer) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO volunteers (id, portal_id, user_id, name, email, phone, skills,
                                    availability, status, registered_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(volunteer.id)
        .bind(volunteer.portal_id)
        .bind(&volunteer.user_id)
        .bind(&volunteer.name)
        .bind(&volunteer.email)
        .bind(&volunteer.phone)
        .bind(&volunteer.skills)
        .bind(&volunteer.availability)
        .bind(volunteer.status.as_str())
        .bind(volunteer.registered_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyVolunteering))?;

        Ok(())
    }
}
