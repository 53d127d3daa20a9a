//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use hub_core::entities::Event;
use hub_core::traits::{EventFilter, EventRepository, RepoResult};
use hub_core::value_objects::Snowflake;

use crate::models::EventModel;

use super::error::{event_not_found, map_db_error};

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new PgEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Event>> {
        let result = sqlx::query_as::<_, EventModel>(
            r"
            SELECT id, title, description, category, starts_at, venue, poster_url,
                   max_participants, status, created_by, created_at, updated_at
            FROM events
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Event::try_from).transpose()
    }

    #[instrument(skip(self, filter))]
    async fn find_filtered(&self, filter: &EventFilter) -> RepoResult<Vec<Event>> {
        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT id, title, description, category, starts_at, venue, poster_url, \
             max_participants, status, created_by, created_at, updated_at \
             FROM events WHERE TRUE",
        );

        if let Some(category) = filter.category {
            builder.push(" AND category = ").push_bind(category.as_str());
        }
        if let Some(status) = filter.status {
            builder.push(" AND status = ").push_bind(status.as_str());
        }
        if let Some(search) = &filter.search {
            builder
                .push(" AND title ILIKE ")
                .push_bind(format!("%{search}%"));
        }

        builder
            .push(" ORDER BY starts_at ASC LIMIT ")
            .push_bind(filter.limit.clamp(1, 100))
            .push(" OFFSET ")
            .push_bind(filter.offset.max(0));

        let results = builder
            .build_query_as::<EventModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        results.into_iter().map(Event::try_from).collect()
    }

    #[instrument(skip(self, event))]
    async fn create(&self, event: &Event) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO events (id, title, description, category, starts_at, venue, poster_url,
                                max_participants, status, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(event.id.into_inner())
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.category.as_str())
        .bind(event.starts_at)
        .bind(&event.venue)
        .bind(&event.poster_url)
        .bind(event.max_participants)
        .bind(event.status.as_str())
        .bind(event.created_by.into_inner())
        .bind(event.created_at)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, event))]
    async fn update(&self, event: &Event) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE events
            SET title = $2, description = $3, category = $4, starts_at = $5, venue = $6,
                poster_url = $7, max_participants = $8, status = $9, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(event.id.into_inner())
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.category.as_str())
        .bind(event.starts_at)
        .bind(&event.venue)
        .bind(&event.poster_url)
        .bind(event.max_participants)
        .bind(event.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(event_not_found(event.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        // Registrations cascade away via the schema foreign key
        let result = sqlx::query(
            r"
            DELETE FROM events WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(event_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgEventRepository>();
    }
}
