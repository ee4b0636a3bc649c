//! Transactions API endpoints - JSON API
//!
//! Endpoints:
//! - api_transaction_store: Validate and record a transaction (POST /transactions)
//! - api_transactions: All transactions, oldest first (GET /transactions)
//! - api_transactions_for_person: One person's transactions (GET /transactions/:person)

use crate::{ApiError, AppState};
use axum::http::StatusCode;
use axum::Json;
use bytes::Bytes;
use serde_json::{Map, Value};
use tchai_core::Transaction;

/// Record a new transaction (JSON API)
///
/// The body is decoded regardless of its Content-Type. A JSON value that is
/// not an object is validated as an object without fields.
pub async fn api_transaction_store(
    state: axum::extract::State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    let payload = match serde_json::from_slice::<Value>(&body) {
        Ok(Value::Object(map)) => map,
        Ok(Value::Null) | Err(_) => return Err(ApiError::MalformedRequest),
        Ok(_) => Map::new(),
    };

    let transaction = Transaction::from_payload(payload)?;
    let recorded = state.ledger.record(transaction).await?;

    Ok((StatusCode::CREATED, Json(recorded)))
}

/// Get all transactions sorted by time (JSON API)
pub async fn api_transactions(
    state: axum::extract::State<AppState>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    Ok(Json(state.ledger.transactions().await?))
}

/// Get transactions sent or received by a person, sorted by time (JSON API)
pub async fn api_transactions_for_person(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<String>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let person = path.0;
    Ok(Json(state.ledger.transactions_for(&person).await?))
}
