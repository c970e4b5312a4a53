//! Repository for the `founders` table.

use clientele_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::founder::{CreateFounder, Founder, UpdateFounder};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tax_id, full_name, client_id, created_at, updated_at";

/// Provides CRUD operations for founders plus link maintenance.
///
/// Every method accepts any Postgres executor, so callers pass either
/// `&PgPool` or `&mut *tx` when the call belongs to a larger transaction.
pub struct FounderRepo;

impl FounderRepo {
    /// Insert a new founder, optionally already linked to `client_id`.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateFounder,
        client_id: Option<DbId>,
    ) -> Result<Founder, sqlx::Error> {
        let query = format!(
            "INSERT INTO founders (tax_id, full_name, client_id, created_at, updated_at)
             VALUES ($1, $2, $3, NOW(), NOW())
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Founder>(&query)
            .bind(input.tax_id)
            .bind(&input.full_name)
            .bind(client_id)
            .fetch_one(executor)
            .await
    }

    /// Find a founder by its internal ID.
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Founder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM founders WHERE id = $1");
        sqlx::query_as::<_, Founder>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a founder and lock its row until the surrounding transaction ends.
    pub async fn lock_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Founder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM founders WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Founder>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Lock the free founder with the lowest id.
    ///
    /// Rows already locked by a concurrent transaction are skipped, so two
    /// simultaneous callers never receive the same founder.
    pub async fn lock_first_free<'e>(
        executor: impl PgExecutor<'e>,
    ) -> Result<Option<Founder>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM founders
             WHERE client_id IS NULL
             ORDER BY id ASC
             LIMIT 1
             FOR UPDATE SKIP LOCKED"
        );
        sqlx::query_as::<_, Founder>(&query)
            .fetch_optional(executor)
            .await
    }

    /// List all founders, ordered by id ascending.
    pub async fn list<'e>(executor: impl PgExecutor<'e>) -> Result<Vec<Founder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM founders ORDER BY id ASC");
        sqlx::query_as::<_, Founder>(&query)
            .fetch_all(executor)
            .await
    }

    /// List the founders linked to a client, ordered by id ascending.
    pub async fn list_by_client<'e>(
        executor: impl PgExecutor<'e>,
        client_id: DbId,
    ) -> Result<Vec<Founder>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM founders
             WHERE client_id = $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Founder>(&query)
            .bind(client_id)
            .fetch_all(executor)
            .await
    }

    /// List every linked founder, ordered by id ascending.
    pub async fn list_linked<'e>(
        executor: impl PgExecutor<'e>,
    ) -> Result<Vec<Founder>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM founders
             WHERE client_id IS NOT NULL
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Founder>(&query)
            .fetch_all(executor)
            .await
    }

    /// Count the founders linked to a client.
    pub async fn count_by_client<'e>(
        executor: impl PgExecutor<'e>,
        client_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM founders WHERE client_id = $1")
            .bind(client_id)
            .fetch_one(executor)
            .await
    }

    /// Update `tax_id` and `full_name`. The client link is left alone; use
    /// [`FounderRepo::link`] to move the founder.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        input: &UpdateFounder,
    ) -> Result<Option<Founder>, sqlx::Error> {
        let query = format!(
            "UPDATE founders SET
                tax_id = $2,
                full_name = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Founder>(&query)
            .bind(id)
            .bind(input.tax_id)
            .bind(&input.full_name)
            .fetch_optional(executor)
            .await
    }

    /// Point a founder at a client.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn link<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        client_id: DbId,
    ) -> Result<Option<Founder>, sqlx::Error> {
        let query = format!(
            "UPDATE founders SET client_id = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Founder>(&query)
            .bind(id)
            .bind(client_id)
            .fetch_optional(executor)
            .await
    }

    /// Release every founder linked to a client. Returns the number released.
    pub async fn unlink_all_for_client<'e>(
        executor: impl PgExecutor<'e>,
        client_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE founders SET client_id = NULL, updated_at = NOW() WHERE client_id = $1",
        )
        .bind(client_id)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }

    /// Release the given founders. Returns the number released.
    pub async fn unlink_many<'e>(
        executor: impl PgExecutor<'e>,
        ids: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE founders SET client_id = NULL, updated_at = NOW()
             WHERE id = ANY($1) AND client_id IS NOT NULL",
        )
        .bind(ids)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }

    /// Permanently delete a founder by ID. Returns `true` if a row was removed.
    pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM founders WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
