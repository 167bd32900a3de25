//! API Gateway Library
//!
//! The HTTP REST API in front of the todo application core.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod token;

use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing::info;

use todo_service_lib::build_application;
use todo_service_lib::config::TodoServiceConfig;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server on the given address.
pub async fn run(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let config = GatewayConfig::from_env()?;
    let service_config = TodoServiceConfig::from_env()?;

    let app = build_application(&service_config).await?;
    let state = AppState::new(app, config);

    // Build router
    let router = create_router(state).layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Todo API listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
