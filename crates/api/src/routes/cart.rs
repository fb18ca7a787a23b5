//! Cart route handlers.

use almacen_core::CartItemId;
use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::instrument;

use crate::db::CartRepository;
use crate::error::Result;
use crate::models::{CartItem, NewCartItem};
use crate::state::AppState;

/// Acknowledgement body for deletes.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub ok: bool,
}

/// Add an item to the cart.
///
/// Persists unconditionally and returns the stored row with its assigned id.
#[instrument(skip(state, item), fields(product_id = %item.product_id))]
pub async fn add(
    State(state): State<AppState>,
    Json(item): Json<NewCartItem>,
) -> Result<Json<CartItem>> {
    let stored = CartRepository::new(state.pool()).insert(&item).await?;
    Ok(Json(stored))
}

/// List all cart items.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CartItem>>> {
    let items = CartRepository::new(state.pool()).list().await?;
    Ok(Json(items))
}

/// Remove a cart item by id.
///
/// A non-existent id is treated as a no-op success.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<CartItemId>,
) -> Result<Json<Ack>> {
    CartRepository::new(state.pool()).delete(id).await?;
    Ok(Json(Ack { ok: true }))
}
