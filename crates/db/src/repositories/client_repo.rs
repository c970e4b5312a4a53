//! Repository for the `clients` table.

use std::collections::HashMap;

use clientele_core::types::DbId;
use sqlx::{PgConnection, PgExecutor};

use crate::models::client::{Client, ClientWithFounders, CreateClient, UpdateClient};
use crate::models::founder::Founder;
use crate::repositories::FounderRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tax_id, name, client_type, created_at, updated_at";

/// Provides CRUD operations for clients.
///
/// Single-statement methods accept any Postgres executor. Methods that
/// assemble a client with its founders issue several statements and take a
/// `&mut PgConnection` so they can run on a pooled connection or inside a
/// transaction.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client, returning the created row.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateClient,
    ) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (tax_id, name, client_type, created_at, updated_at)
             VALUES ($1, $2, $3, NOW(), NOW())
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(input.tax_id)
            .bind(&input.name)
            .bind(input.client_type.id())
            .fetch_one(executor)
            .await
    }

    /// Find a client by its internal ID.
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a client and lock its row until the surrounding transaction ends.
    ///
    /// Taken before any founder is linked to the client so the
    /// sole-proprietor check and the link happen atomically.
    pub async fn lock_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all clients, ordered by id ascending.
    pub async fn list<'e>(executor: impl PgExecutor<'e>) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY id ASC");
        sqlx::query_as::<_, Client>(&query)
            .fetch_all(executor)
            .await
    }

    /// Count all clients.
    pub async fn count<'e>(executor: impl PgExecutor<'e>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clients")
            .fetch_one(executor)
            .await
    }

    /// Update a client's tax id, name and type.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        input: &UpdateClient,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "UPDATE clients SET
                tax_id = $2,
                name = $3,
                client_type = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(input.tax_id)
            .bind(&input.name)
            .bind(input.client_type.id())
            .fetch_optional(executor)
            .await
    }

    /// Permanently delete a client by ID. Returns `true` if a row was removed.
    ///
    /// The foreign key releases linked founders (`ON DELETE SET NULL`), but
    /// callers unlink them explicitly first so their `updated_at` moves too.
    pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Founder joins
    // -----------------------------------------------------------------------

    /// Find a client by ID, enriched with its founders.
    pub async fn find_with_founders(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<ClientWithFounders>, sqlx::Error> {
        let Some(client) = Self::find_by_id(&mut *conn, id).await? else {
            return Ok(None);
        };
        let founders = FounderRepo::list_by_client(&mut *conn, id).await?;
        Ok(Some(ClientWithFounders { client, founders }))
    }

    /// List all clients with their founders.
    pub async fn list_with_founders(
        conn: &mut PgConnection,
    ) -> Result<Vec<ClientWithFounders>, sqlx::Error> {
        let clients = Self::list(&mut *conn).await?;
        let mut by_client: HashMap<DbId, Vec<Founder>> = HashMap::new();
        for founder in FounderRepo::list_linked(&mut *conn).await? {
            if let Some(client_id) = founder.client_id {
                by_client.entry(client_id).or_default().push(founder);
            }
        }

        Ok(clients
            .into_iter()
            .map(|client| {
                let founders = by_client.remove(&client.id).unwrap_or_default();
                ClientWithFounders { client, founders }
            })
            .collect())
    }
}
