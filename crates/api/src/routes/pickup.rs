//! Pickup route handlers.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::db::PickupRepository;
use crate::error::Result;
use crate::models::{PICKUP_POINTS, PickupPoint, PickupSelection, SelectPickup};
use crate::state::AppState;

/// List the static pickup point catalog.
#[instrument]
pub async fn points() -> Json<&'static [PickupPoint]> {
    Json(PICKUP_POINTS)
}

/// Set the current pickup selection, replacing any previous one.
#[instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn select(
    State(state): State<AppState>,
    Json(payload): Json<SelectPickup>,
) -> Result<Json<PickupSelection>> {
    let stored = PickupRepository::new(state.pool()).replace(&payload).await?;
    Ok(Json(stored))
}

/// Get the current pickup selection.
///
/// Returns the sentinel `{name: "No seleccionado", address: ""}` when no
/// selection has been made.
#[instrument(skip(state))]
pub async fn selected(State(state): State<AppState>) -> Result<Response> {
    let current = PickupRepository::new(state.pool()).current().await?;

    Ok(match current {
        Some(selection) => Json(selection).into_response(),
        None => Json(SelectPickup::unselected()).into_response(),
    })
}
