//! Checkout route handler.
//!
//! Reads the cart and the pickup selection, builds a `MercadoPago`
//! preference, and returns only the redirect URL. Checkout success is
//! defined purely as "a redirect URL was obtained": the cart is not cleared
//! and no order record is created.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::db::{CartRepository, PickupRepository};
use crate::error::{AppError, Result};
use crate::mercado_pago::{BackUrls, PreferenceItem, PreferenceRequest};
use crate::models::{CartItem, PickupSelection};
use crate::state::AppState;

/// Currency for all line items.
const CURRENCY_ID: &str = "ARS";

/// Statement descriptor shown on the buyer's card statement.
const STATEMENT_DESCRIPTOR: &str = "Supermercado AR";

/// Maximum title length accepted by the preference API.
const MAX_TITLE_CHARS: usize = 256;

/// Checkout response carrying the payment redirect URL.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub init_point: String,
}

/// Create a checkout preference for the current cart.
///
/// Fails with 400 `Carrito vacío` when the cart is empty; the payment API
/// is not called in that case.
#[instrument(skip(state))]
pub async fn create_preference(State(state): State<AppState>) -> Result<Json<CheckoutResponse>> {
    let items = CartRepository::new(state.pool()).list().await?;
    if items.is_empty() {
        return Err(AppError::BadRequest("Carrito vacío".to_string()));
    }

    let selection = PickupRepository::new(state.pool()).current().await?;
    let request = build_preference(&items, selection.as_ref());

    let preference = state.mercado_pago().create_preference(&request).await?;

    Ok(Json(CheckoutResponse {
        init_point: preference.init_point,
    }))
}

/// Build the preference payload from the cart rows and pickup selection.
fn build_preference(
    items: &[CartItem],
    selection: Option<&PickupSelection>,
) -> PreferenceRequest {
    let note = selection.map_or_else(
        || "Retiro en local".to_string(),
        |s| format!("RETIRO: {} - {}", s.name, s.address),
    );

    PreferenceRequest {
        items: items
            .iter()
            .map(|item| PreferenceItem {
                title: item.title.chars().take(MAX_TITLE_CHARS).collect(),
                quantity: item.quantity,
                currency_id: CURRENCY_ID.to_string(),
                unit_price: item.price,
                picture_url: item.image.clone(),
            })
            .collect(),
        back_urls: BackUrls {
            success: "/".to_string(),
            failure: "/".to_string(),
            pending: "/".to_string(),
        },
        auto_return: "approved".to_string(),
        statement_descriptor: STATEMENT_DESCRIPTOR.to_string(),
        additional_info: note,
    }
}
