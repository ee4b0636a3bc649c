//! HTTP JSON API server
//!
//! Routes are organized into modules:
//! - routes::transactions: Record and list transactions
//! - routes::balance: Per-person balance

pub mod error;
pub mod routes;

use axum::{routing::get, Router};
use tchai_config::Config;
use tchai_core::Ledger;
use tokio::net::TcpListener;
use std::sync::Arc;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<Ledger>,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::balance::api_balance;
    use routes::transactions::{api_transaction_store, api_transactions, api_transactions_for_person};

    Router::new()
        .route("/transactions", get(api_transactions).post(api_transaction_store))
        .route("/transactions/:person", get(api_transactions_for_person))
        .route("/balance/:person", get(api_balance))
        .with_state(state)
}

/// Start the HTTP server
///
/// Binds to the configured address and serves until Ctrl-C.
pub async fn start_server(config: Config) -> std::io::Result<()> {
    let addr = config.bind_address();
    let ledger = Arc::new(Ledger::with_file(config.storage.data_file.clone()));
    let router = create_router(AppState { ledger });

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting tchai server on http://{}", addr);
    log::info!("Transactions stored in {}", config.storage.data_file.display());
    log::info!("Available routes:");
    log::info!("  - POST /transactions (Record a transaction)");
    log::info!("  - GET  /transactions (All transactions)");
    log::info!("  - GET  /transactions/:person (Transactions of one person)");
    log::info!("  - GET  /balance/:person (Net balance of one person)");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

// ==================== Tests ====================
