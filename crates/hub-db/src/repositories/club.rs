//! PostgreSQL implementation of ClubRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use hub_core::entities::Club;
use hub_core::traits::{ClubRepository, RepoResult};
use hub_core::value_objects::Snowflake;

use crate::models::ClubModel;

use super::error::{club_not_found, map_db_error};

/// PostgreSQL implementation of ClubRepository
#[derive(Clone)]
pub struct PgClubRepository {
    pool: PgPool,
}

impl PgClubRepository {
    /// Create a new PgClubRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClubRepository for PgClubRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Club>> {
        let result = sqlx::query_as::<_, ClubModel>(
            r"
            SELECT id, name, description, logo_url, category, created_by, created_at, updated_at
            FROM clubs
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Club::from))
    }

    #[instrument(skip(self))]
    async fn find_filtered(
        &self,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<Club>> {
        let limit = limit.clamp(1, 100);
        let offset = offset.max(0);

        let results = match search {
            Some(term) => {
                sqlx::query_as::<_, ClubModel>(
                    r"
                    SELECT id, name, description, logo_url, category, created_by, created_at, updated_at
                    FROM clubs
                    WHERE name ILIKE $1
                    ORDER BY created_at DESC
                    LIMIT $2 OFFSET $3
                    ",
                )
                .bind(format!("%{term}%"))
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ClubModel>(
                    r"
                    SELECT id, name, description, logo_url, category, created_by, created_at, updated_at
                    FROM clubs
                    ORDER BY created_at DESC
                    LIMIT $1 OFFSET $2
                    ",
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Club::from).collect())
    }

    #[instrument(skip(self, club))]
    async fn create(&self, club: &Club) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO clubs (id, name, description, logo_url, category, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(club.id.into_inner())
        .bind(&club.name)
        .bind(&club.description)
        .bind(&club.logo_url)
        .bind(&club.category)
        .bind(club.created_by.into_inner())
        .bind(club.created_at)
        .bind(club.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, club))]
    async fn update(&self, club: &Club) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE clubs
            SET name = $2, description = $3, logo_url = $4, category = $5, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(club.id.into_inner())
        .bind(&club.name)
        .bind(&club.description)
        .bind(&club.logo_url)
        .bind(&club.category)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(club_not_found(club.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        // Memberships and announcements cascade away via the schema foreign keys
        let result = sqlx::query(
            r"
            DELETE FROM clubs WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(club_not_found(id));
        }

        Ok(())
    }
}
