//! Pickup point models and the static store catalog.

use almacen_core::PickupSelectionId;
use serde::{Deserialize, Serialize};

/// A physical store location a customer can select for order collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PickupPoint {
    pub name: &'static str,
    pub address: &'static str,
}

/// Fixed catalog of pickup locations, exposed verbatim and read-only.
pub const PICKUP_POINTS: &[PickupPoint] = &[
    PickupPoint {
        name: "Local Palermo",
        address: "Guatemala 4770, Palermo, CABA",
    },
    PickupPoint {
        name: "Local Belgrano",
        address: "Av. Cabildo 2230, Belgrano, CABA",
    },
    PickupPoint {
        name: "Local Recoleta",
        address: "Av. Santa Fe 1850, Recoleta, CABA",
    },
    PickupPoint {
        name: "Local Almagro",
        address: "Av. Corrientes 4500, Almagro, CABA",
    },
    PickupPoint {
        name: "Local Flores",
        address: "Av. Rivadavia 6800, Flores, CABA",
    },
    PickupPoint {
        name: "Local Quilmes",
        address: "Av. Mitre 750, Quilmes, GBA",
    },
    PickupPoint {
        name: "Local San Isidro",
        address: "Av. Centenario 950, San Isidro, GBA",
    },
    PickupPoint {
        name: "Local La Plata",
        address: "Calle 7 esq. 50, La Plata",
    },
];

/// The currently chosen pickup location. At most one row exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct PickupSelection {
    pub id: PickupSelectionId,
    pub name: String,
    pub address: String,
}

/// Payload for selecting a pickup point.
///
/// The submitted point is not required to match the catalog; unknown fields
/// are rejected at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectPickup {
    pub name: String,
    pub address: String,
}

impl SelectPickup {
    /// Sentinel returned when no pickup point has been selected yet.
    #[must_use]
    pub fn unselected() -> Self {
        Self {
            name: "No seleccionado".to_string(),
            address: String::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_eight_locations() {
        assert_eq!(PICKUP_POINTS.len(), 8);
        assert_eq!(PICKUP_POINTS[0].name, "Local Palermo");
        assert_eq!(PICKUP_POINTS[0].address, "Guatemala 4770, Palermo, CABA");
    }

    #[test]
    fn test_select_pickup_rejects_unknown_fields() {
        let result: Result<SelectPickup, _> = serde_json::from_value(serde_json::json!({
            "name": "Local Palermo",
            "address": "Guatemala 4770, Palermo, CABA",
            "phone": "11-5555-5555"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_unselected_sentinel() {
        let sentinel = SelectPickup::unselected();
        let json = serde_json::to_value(&sentinel).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "name": "No seleccionado", "address": "" })
        );
    }
}
