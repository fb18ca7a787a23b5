//! HTTP route handlers for the Almacén API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                - Liveness check
//! GET    /health/ready          - Readiness check (database ping)
//!
//! # Pickup
//! GET    /pickup-points         - Static pickup catalog
//! POST   /pickup-select         - Set current pickup selection
//! GET    /pickup-selected       - Current selection (sentinel when unset)
//!
//! # Search
//! GET    /search?q=             - Proxy product search
//!
//! # Cart
//! POST   /cart                  - Add cart item
//! GET    /cart                  - List cart items
//! DELETE /cart/{id}             - Remove cart item
//!
//! # Checkout
//! POST   /mp/create-preference  - Create checkout redirect
//! ```

pub mod cart;
pub mod checkout;
pub mod pickup;
pub mod search;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Pickup
        .route("/pickup-points", get(pickup::points))
        .route("/pickup-select", post(pickup::select))
        .route("/pickup-selected", get(pickup::selected))
        // Search
        .route("/search", get(search::search))
        // Cart
        .route("/cart", post(cart::add).get(cart::list))
        .route("/cart/{id}", delete(cart::remove))
        // Checkout
        .route("/mp/create-preference", post(checkout::create_preference))
}
