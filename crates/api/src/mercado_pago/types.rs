//! Schemas for the `MercadoPago` checkout preference API.

use serde::{Deserialize, Serialize};

/// Checkout preference creation request.
#[derive(Debug, Clone, Serialize)]
pub struct PreferenceRequest {
    pub items: Vec<PreferenceItem>,
    pub back_urls: BackUrls,
    pub auto_return: String,
    pub statement_descriptor: String,
    pub additional_info: String,
}

/// One purchasable line in a preference.
#[derive(Debug, Clone, Serialize)]
pub struct PreferenceItem {
    pub title: String,
    pub quantity: i64,
    pub currency_id: String,
    pub unit_price: f64,
    pub picture_url: String,
}

/// Back-navigation URLs after payment.
#[derive(Debug, Clone, Serialize)]
pub struct BackUrls {
    pub success: String,
    pub failure: String,
    pub pending: String,
}

/// The subset of the preference response the storefront consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPreference {
    /// Redirect URL for completing payment.
    pub init_point: String,
}
