//! `MercadoLibre` search API client.
//!
//! Proxies the public, unauthenticated site search endpoint and reshapes the
//! results into the summaries the storefront needs. Responses are decoded
//! into explicit schemas so a malformed upstream body fails with a named
//! error instead of an untyped traversal panic.

pub mod types;

pub use types::{Installments, ProductSummary, SearchResult, Shipping};

use thiserror::Error;

use types::SearchResponse;

/// `MercadoLibre` API base URL.
const BASE_URL: &str = "https://api.mercadolibre.com";

/// Fixed result limit forwarded to the search endpoint.
const RESULT_LIMIT: u32 = 20;

/// Errors that can occur when interacting with the search API.
#[derive(Debug, Error)]
pub enum MeliError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to decode the response body.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// `MercadoLibre` search client.
#[derive(Debug, Clone)]
pub struct MeliClient {
    client: reqwest::Client,
    search_url: String,
}

impl MeliClient {
    /// Create a new search client for the given site id (e.g. `MLA`).
    #[must_use]
    pub fn new(site: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            search_url: format!("{BASE_URL}/sites/{site}/search"),
        }
    }

    /// Search listings for a free-text query.
    ///
    /// Results without a catalog product id are discarded as low-quality
    /// listings.
    ///
    /// # Errors
    ///
    /// Returns `MeliError` if the request fails, the API responds with a
    /// non-success status, or the body does not match the expected schema.
    pub async fn search(&self, query: &str) -> Result<Vec<ProductSummary>, MeliError> {
        let limit = RESULT_LIMIT.to_string();
        let response = self
            .client
            .get(&self.search_url)
            .query(&[("q", query), ("limit", &limit)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MeliError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| MeliError::Parse(e.to_string()))?;

        Ok(types::shape_results(body.results))
    }
}
