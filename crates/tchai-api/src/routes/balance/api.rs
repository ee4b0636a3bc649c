//! Balance API endpoints - JSON API

use crate::{ApiError, AppState};
use axum::Json;
use serde::Serialize;

/// Balance response body
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub person: String,
    pub balance: f64,
}

/// Net amount received minus sent for a person (JSON API)
///
/// Unknown persons have a balance of 0.
pub async fn api_balance(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<String>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let person = path.0;
    let balance = state.ledger.balance(&person).await?;
    Ok(Json(BalanceResponse { person, balance }))
}
