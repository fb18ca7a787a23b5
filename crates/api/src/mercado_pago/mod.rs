//! `MercadoPago` checkout preference client.
//!
//! Creates checkout preferences through the REST API and extracts the
//! redirect URL (`init_point`). The response is decoded into an explicit
//! schema so a missing `init_point` fails with a named error.

pub mod types;

pub use types::{BackUrls, CreatedPreference, PreferenceItem, PreferenceRequest};

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// `MercadoPago` API base URL.
const BASE_URL: &str = "https://api.mercadopago.com";

/// Errors that can occur when interacting with the `MercadoPago` API.
#[derive(Debug, Error)]
pub enum MercadoPagoError {
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

/// `MercadoPago` preference client.
#[derive(Debug, Clone)]
pub struct PreferenceClient {
    client: reqwest::Client,
}

impl PreferenceClient {
    /// Create a new preference client authenticated with the given token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value or the
    /// HTTP client fails to build.
    pub fn new(access_token: &SecretString) -> Result<Self, MercadoPagoError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", access_token.expose_secret());
        let mut value = HeaderValue::from_str(&auth_value)
            .map_err(|e| MercadoPagoError::Parse(format!("invalid access token: {e}")))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self { client })
    }

    /// Create a checkout preference and return the redirect data.
    ///
    /// # Errors
    ///
    /// Returns `MercadoPagoError` if the request fails, the API rejects the
    /// payload, or the response lacks the expected fields.
    pub async fn create_preference(
        &self,
        request: &PreferenceRequest,
    ) -> Result<CreatedPreference, MercadoPagoError> {
        let url = format!("{BASE_URL}/checkout/preferences");

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MercadoPagoError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<CreatedPreference>()
            .await
            .map_err(|e| MercadoPagoError::Parse(e.to_string()))
    }
}
