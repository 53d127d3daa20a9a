//! PostgreSQL implementation of LedgerRepository
//!
//! One implementation covers both relationship kinds; the kind selects the
//! backing table. Two properties are enforced here and nowhere else:
//!
//! - Pair uniqueness lives in the tables' primary keys. `create` simply
//!   inserts and translates the unique violation, so two concurrent
//!   duplicate requests race at the constraint and exactly one wins.
//! - The event capacity check runs inside the same transaction as the
//!   insert, behind a `FOR UPDATE` lock on the event row, so the count it
//!   reads cannot change before the insert commits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use hub_core::entities::{Relationship, ResourceKind};
use hub_core::error::DomainError;
use hub_core::traits::{LedgerRepository, RepoResult};
use hub_core::value_objects::Snowflake;

use crate::mappers::relationship_from_model;
use crate::models::RelationshipModel;

use super::error::{
    club_not_found, duplicate_relationship, event_not_found, map_db_error, map_unique_violation,
    relationship_not_found,
};

/// Table backing a relationship kind
fn table(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Event => "event_registrations",
        ResourceKind::Club => "club_memberships",
    }
}

/// Resource id column within the kind's table
fn resource_column(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Event => "event_id",
        ResourceKind::Club => "club_id",
    }
}

/// Timestamp column within the kind's table
fn time_column(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Event => "registered_at",
        ResourceKind::Club => "joined_at",
    }
}

/// PostgreSQL implementation of LedgerRepository
#[derive(Clone)]
pub struct PgLedgerRepository {
    pool: PgPool,
}

impl PgLedgerRepository {
    /// Create a new PgLedgerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LedgerRepository for PgLedgerRepository {
    #[instrument(skip(self))]
    async fn create(
        &self,
        user_id: Snowflake,
        resource_id: Snowflake,
        kind: ResourceKind,
    ) -> RepoResult<Relationship> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        match kind {
            ResourceKind::Event => {
                // Lock the event row so a concurrent create for the same
                // event observes the count only after we commit or abort.
                let max_participants = sqlx::query_scalar::<_, Option<i32>>(
                    r"
                    SELECT max_participants FROM events WHERE id = $1 FOR UPDATE
                    ",
                )
                .bind(resource_id.into_inner())
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_db_error)?
                .ok_or_else(|| event_not_found(resource_id))?;

                if let Some(cap) = max_participants {
                    let registered = sqlx::query_scalar::<_, i64>(
                        r"
                        SELECT COUNT(*) FROM event_registrations WHERE event_id = $1
                        ",
                    )
                    .bind(resource_id.into_inner())
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(map_db_error)?;

                    if registered >= i64::from(cap) {
                        return Err(DomainError::EventFull { registered });
                    }
                }
            }
            ResourceKind::Club => {
                let exists = sqlx::query_scalar::<_, bool>(
                    r"
                    SELECT EXISTS(SELECT 1 FROM clubs WHERE id = $1)
                    ",
                )
                .bind(resource_id.into_inner())
                .fetch_one(&mut *tx)
                .await
                .map_err(map_db_error)?;

                if !exists {
                    return Err(club_not_found(resource_id));
                }
            }
        }

        let sql = format!(
            "INSERT INTO {table} (user_id, {resource}) VALUES ($1, $2) RETURNING {time}",
            table = table(kind),
            resource = resource_column(kind),
            time = time_column(kind),
        );

        let linked_at = sqlx::query_scalar::<_, DateTime<Utc>>(&sql)
            .bind(user_id.into_inner())
            .bind(resource_id.into_inner())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| map_unique_violation(e, || duplicate_relationship(kind)))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Relationship {
            user_id,
            resource_id,
            kind,
            linked_at,
        })
    }

    #[instrument(skip(self))]
    async fn remove(
        &self,
        user_id: Snowflake,
        resource_id: Snowflake,
        kind: ResourceKind,
    ) -> RepoResult<()> {
        let sql = format!(
            "DELETE FROM {table} WHERE user_id = $1 AND {resource} = $2",
            table = table(kind),
            resource = resource_column(kind),
        );

        let result = sqlx::query(&sql)
            .bind(user_id.into_inner())
            .bind(resource_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(relationship_not_found(kind));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn is_active(
        &self,
        user_id: Snowflake,
        resource_id: Snowflake,
        kind: ResourceKind,
    ) -> RepoResult<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {table} WHERE user_id = $1 AND {resource} = $2)",
            table = table(kind),
            resource = resource_column(kind),
        );

        let result = sqlx::query_scalar::<_, bool>(&sql)
            .bind(user_id.into_inner())
            .bind(resource_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn list_for_user(
        &self,
        user_id: Snowflake,
        kind: ResourceKind,
    ) -> RepoResult<Vec<Relationship>> {
        let sql = format!(
            "SELECT user_id, {resource} AS resource_id, {time} AS linked_at \
             FROM {table} WHERE user_id = $1 ORDER BY {time} DESC",
            table = table(kind),
            resource = resource_column(kind),
            time = time_column(kind),
        );

        let results = sqlx::query_as::<_, RelationshipModel>(&sql)
            .bind(user_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|model| relationship_from_model(model, kind))
            .collect())
    }

    #[instrument(skip(self))]
    async fn list_for_resource(
        &self,
        resource_id: Snowflake,
        kind: ResourceKind,
    ) -> RepoResult<Vec<Relationship>> {
        let sql = format!(
            "SELECT user_id, {resource} AS resource_id, {time} AS linked_at \
             FROM {table} WHERE {resource} = $1 ORDER BY {time} DESC",
            table = table(kind),
            resource = resource_column(kind),
            time = time_column(kind),
        );

        let results = sqlx::query_as::<_, RelationshipModel>(&sql)
            .bind(resource_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|model| relationship_from_model(model, kind))
            .collect())
    }

    #[instrument(skip(self))]
    async fn count(&self, resource_id: Snowflake, kind: ResourceKind) -> RepoResult<i64> {
        let sql = format!(
            "SELECT COUNT(*) FROM {table} WHERE {resource} = $1",
            table = table(kind),
            resource = resource_column(kind),
        );

        let result = sqlx::query_scalar::<_, i64>(&sql)
            .bind(resource_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result)
    }
}
