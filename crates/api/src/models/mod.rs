//! Domain models for the Almacén API.
//!
//! Rows map one-to-one to the two `SQLite` tables; request payloads are
//! explicit schemas validated at the HTTP boundary.

pub mod cart;
pub mod pickup;

pub use cart::{CartItem, NewCartItem};
pub use pickup::{PICKUP_POINTS, PickupPoint, PickupSelection, SelectPickup};
