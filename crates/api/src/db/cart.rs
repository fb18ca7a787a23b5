//! Cart repository for database operations.

use almacen_core::CartItemId;
use sqlx::SqlitePool;

use super::RepositoryError;
use crate::models::{CartItem, NewCartItem};

/// Repository for cart line item operations.
pub struct CartRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new line item and return the stored row with its assigned id.
    ///
    /// No duplicate check is performed: adding the same product twice
    /// creates two rows.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, item: &NewCartItem) -> Result<CartItem, RepositoryError> {
        let row = sqlx::query_as::<_, CartItem>(
            r"
            INSERT INTO cart_item (product_id, title, price, quantity, image)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, product_id, title, price, quantity, image
            ",
        )
        .bind(&item.product_id)
        .bind(&item.title)
        .bind(item.price)
        .bind(item.quantity)
        .bind(&item.image)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// List all line items in storage order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<CartItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, CartItem>(
            "SELECT id, product_id, title, price, quantity, image FROM cart_item",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Delete the line item with the given id.
    ///
    /// A non-existent id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: CartItemId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_item WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
