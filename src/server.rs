//! HTTP server initialization and runtime setup.
//!
//! Handles the document store connection and the Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::MongoPostRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use mongodb::Client;
use mongodb::bson::doc;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The MongoDB client (single handle reused across all requests)
/// - The Axum HTTP server with graceful shutdown on ctrl-c
///
/// The store is pinged once at startup and the outcome logged; a failed ping
/// is not fatal, and the server keeps accepting requests. There is no retry
/// and no reconnection logic: each request that reaches the store either
/// completes or surfaces the driver's error.
///
/// # Errors
///
/// Returns an error if:
/// - The connection string cannot be parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = Client::with_uri_str(&config.mongodb_url).await?;
    let db = client.database(&config.mongodb_database);

    match db.run_command(doc! { "ping": 1 }).await {
        Ok(_) => tracing::info!("Connected to document store"),
        Err(e) => tracing::error!("Document store connection error: {e}"),
    }

    let posts = Arc::new(MongoPostRepository::new(&db));
    let state = AppState::new(posts);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves when ctrl-c is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}
