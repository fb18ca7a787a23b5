//! Schemas for the `MercadoLibre` search API and the summaries served to
//! the storefront.

use serde::{Deserialize, Serialize};

/// Top-level search response.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

/// A single listing as returned by the search endpoint.
///
/// Only the fields the storefront consumes are declared; everything else in
/// the upstream body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub thumbnail: String,
    pub condition: String,
    /// Present when the listing is tied to a canonical product record.
    #[serde(default)]
    pub catalog_product_id: Option<String>,
    #[serde(default)]
    pub installments: Option<Installments>,
    pub shipping: Shipping,
}

/// Installment plan attached to a listing.
///
/// A plan that omits its rate is treated as interest-bearing.
#[derive(Debug, Clone, Deserialize)]
pub struct Installments {
    #[serde(default)]
    pub quantity: i64,
    #[serde(default = "default_rate")]
    pub rate: f64,
    #[serde(default)]
    pub amount: f64,
}

const fn default_rate() -> f64 {
    1.0
}

/// Shipping options attached to a listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Shipping {
    #[serde(default)]
    pub free_shipping: bool,
}

/// Product summary served to the storefront.
#[derive(Debug, Clone, Serialize)]
pub struct ProductSummary {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub shipping: bool,
    pub installments: String,
    pub condition: String,
}

impl From<SearchResult> for ProductSummary {
    fn from(result: SearchResult) -> Self {
        let installments = installment_text(result.installments.as_ref());

        Self {
            id: result.id,
            title: result.title,
            price: result.price,
            image: result.thumbnail,
            shipping: result.shipping.free_shipping,
            installments,
            condition: result.condition,
        }
    }
}

/// Reshape raw search results, dropping listings without a catalog product id.
pub(crate) fn shape_results(results: Vec<SearchResult>) -> Vec<ProductSummary> {
    results
        .into_iter()
        .filter(|r| r.catalog_product_id.as_deref().is_some_and(|id| !id.is_empty()))
        .map(ProductSummary::from)
        .collect()
}

/// Derive the installment display text for a listing.
///
/// A zero interest rate formats as `{quantity}x ${amount} sin interés` with
/// Argentine thousands punctuation; any other rate is literally
/// `Con interés`. A missing plan defaults quantity and amount to zero and
/// still takes the zero-rate branch, yielding `0x $0 sin interés`.
#[allow(clippy::float_cmp)]
pub fn installment_text(installments: Option<&Installments>) -> String {
    let (quantity, rate, amount) =
        installments.map_or((0, 0.0, 0.0), |i| (i.quantity, i.rate, i.amount));

    if rate == 0.0 {
        format!("{quantity}x ${} sin interés", format_thousands(amount))
    } else {
        "Con interés".to_string()
    }
}

/// Round to whole pesos and insert `.` as the thousands separator.
fn format_thousands(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let value = amount.round() as i64;
    let digits = value.unsigned_abs().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn listing(id: &str, catalog_product_id: Option<&str>) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "title": "Yerba mate 1kg",
            "price": 4500.0,
            "thumbnail": "https://example.com/yerba.jpg",
            "condition": "new",
            "catalog_product_id": catalog_product_id,
            "installments": { "quantity": 6, "rate": 0.0, "amount": 750.0 },
            "shipping": { "free_shipping": true }
        })
    }

    #[test]
    fn test_shape_drops_listings_without_catalog_id() {
        let results: Vec<SearchResult> = serde_json::from_value(serde_json::json!([
            listing("MLA1", Some("MLA-CAT-1")),
            listing("MLA2", None),
            listing("MLA3", Some("")),
        ]))
        .unwrap();

        let summaries = shape_results(results);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, "MLA1");
    }

    #[test]
    fn test_summary_shape() {
        let result: SearchResult =
            serde_json::from_value(listing("MLA1", Some("MLA-CAT-1"))).unwrap();
        let summary = ProductSummary::from(result);

        assert_eq!(summary.title, "Yerba mate 1kg");
        assert_eq!(summary.image, "https://example.com/yerba.jpg");
        assert!(summary.shipping);
        assert_eq!(summary.installments, "6x $750 sin interés");
        assert_eq!(summary.condition, "new");
    }

    #[test]
    fn test_installment_text_zero_rate() {
        let plan = Installments {
            quantity: 12,
            rate: 0.0,
            amount: 1234567.0,
        };
        assert_eq!(
            installment_text(Some(&plan)),
            "12x $1.234.567 sin interés"
        );
    }

    #[test]
    fn test_installment_text_nonzero_rate_is_literal() {
        let plan = Installments {
            quantity: 12,
            rate: 45.5,
            amount: 999.0,
        };
        assert_eq!(installment_text(Some(&plan)), "Con interés");
    }

    #[test]
    fn test_installment_text_missing_plan_defaults_to_zero() {
        assert_eq!(installment_text(None), "0x $0 sin interés");
    }

    #[test]
    fn test_installment_text_plan_without_rate_has_interest() {
        let plan: Installments = serde_json::from_value(serde_json::json!({
            "quantity": 3,
            "amount": 1000.0
        }))
        .unwrap();

        assert_eq!(installment_text(Some(&plan)), "Con interés");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1000.0), "1.000");
        assert_eq!(format_thousands(1499.6), "1.500");
        assert_eq!(format_thousands(12345678.0), "12.345.678");
    }

    #[test]
    fn test_malformed_result_fails_to_decode() {
        // `price` missing entirely
        let result: Result<SearchResult, _> = serde_json::from_value(serde_json::json!({
            "id": "MLA1",
            "title": "Yerba mate 1kg",
            "thumbnail": "https://example.com/yerba.jpg",
            "condition": "new",
            "shipping": {}
        }));

        assert!(result.is_err());
    }
}
