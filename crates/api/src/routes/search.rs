//! Search route handler.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::meli::ProductSummary;
use crate::state::AppState;

/// Query parameters for product search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
}

/// Proxy a product search to the marketplace.
///
/// The query is forwarded as-is; no length or sanitization check is applied.
#[instrument(skip(state), fields(q = %params.q))]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<ProductSummary>>> {
    let results = state.meli().search(&params.q).await?;
    Ok(Json(results))
}
