//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::meli::MeliClient;
use crate::mercado_pago::{MercadoPagoError, PreferenceClient};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the database pool and external API clients.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    pool: SqlitePool,
    meli: MeliClient,
    mercado_pago: PreferenceClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the `MercadoPago` client cannot be built from the
    /// configured access token.
    pub fn new(config: AppConfig, pool: SqlitePool) -> Result<Self, MercadoPagoError> {
        let meli = MeliClient::new(&config.meli_site);
        let mercado_pago = PreferenceClient::new(&config.mp_access_token)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                meli,
                mercado_pago,
            }),
        })
    }

    /// Get a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }

    /// Get a reference to the `MercadoLibre` search client.
    #[must_use]
    pub fn meli(&self) -> &MeliClient {
        &self.inner.meli
    }

    /// Get a reference to the `MercadoPago` preference client.
    #[must_use]
    pub fn mercado_pago(&self) -> &PreferenceClient {
        &self.inner.mercado_pago
    }
}
