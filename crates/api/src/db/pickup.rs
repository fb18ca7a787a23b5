//! Pickup selection repository for database operations.

use sqlx::SqlitePool;

use super::RepositoryError;
use crate::models::{PickupSelection, SelectPickup};

/// Repository for the single-row pickup selection.
pub struct PickupRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PickupRepository<'a> {
    /// Create a new pickup repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Replace any existing selection with the given one.
    ///
    /// Delete and insert run in a single transaction so at most one row
    /// exists at any commit point.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the transaction fails.
    pub async fn replace(
        &self,
        selection: &SelectPickup,
    ) -> Result<PickupSelection, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM pickup_selection")
            .execute(&mut *tx)
            .await?;

        let row = sqlx::query_as::<_, PickupSelection>(
            r"
            INSERT INTO pickup_selection (name, address)
            VALUES (?1, ?2)
            RETURNING id, name, address
            ",
        )
        .bind(&selection.name)
        .bind(&selection.address)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row)
    }

    /// Get the current selection, if any.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn current(&self) -> Result<Option<PickupSelection>, RepositoryError> {
        let row = sqlx::query_as::<_, PickupSelection>(
            "SELECT id, name, address FROM pickup_selection LIMIT 1",
        )
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }
}
