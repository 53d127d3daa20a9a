//! PostgreSQL implementation of AnnouncementRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use hub_core::entities::Announcement;
use hub_core::traits::{AnnouncementRepository, RepoResult};
use hub_core::value_objects::Snowflake;

use crate::models::AnnouncementModel;

use super::error::map_db_error;

/// PostgreSQL implementation of AnnouncementRepository
#[derive(Clone)]
pub struct PgAnnouncementRepository {
    pool: PgPool,
}

impl PgAnnouncementRepository {
    /// Create a new PgAnnouncementRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnnouncementRepository for PgAnnouncementRepository {
    #[instrument(skip(self))]
    async fn find_by_club(&self, club_id: Snowflake) -> RepoResult<Vec<Announcement>> {
        let results = sqlx::query_as::<_, AnnouncementModel>(
            r"
            SELECT id, club_id, title, body, created_by, created_at
            FROM club_announcements
            WHERE club_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(club_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Announcement::from).collect())
    }

    #[instrument(skip(self, announcement))]
    async fn create(&self, announcement: &Announcement) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO club_announcements (id, club_id, title, body, created_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(announcement.id.into_inner())
        .bind(announcement.club_id.into_inner())
        .bind(&announcement.title)
        .bind(&announcement.body)
        .bind(announcement.created_by.into_inner())
        .bind(announcement.created_at)
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
        assert_send_sync::<PgAnnouncementRepository>();
    }
}
