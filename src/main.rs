//! Issue Relay (v1)
//!
//! A backend-for-frontend relay built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌───────────────────────────────────────────────┐
//!                        │                  ISSUE RELAY                   │
//!                        │                                                │
//!   Browser Request      │  ┌─────────┐    ┌──────────┐                  │
//!   ────────────────────┼─▶│  http   │───▶│ handlers │                  │
//!   (CORS origin only)   │  │ server  │    └────┬─────┘                  │
//!                        │  └─────────┘         │                        │
//!                        │                      ▼                        │
//!                        │            ┌──────────────────┐               │
//!                        │            │     upstream     │               │
//!                        │            │  jira │ generator│───────────────┼──▶ Issue tracker /
//!                        │            └────────┬─────────┘               │    generation API
//!                        │                     │                         │
//!   Browser Response     │            ┌────────▼─────────┐               │
//!   ◀────────────────────┼────────────│     document     │               │
//!   (flat JSON strings)  │            │  (flatten ADF)   │               │
//!                        │            └──────────────────┘               │
//!                        │                                                │
//!                        │  ┌──────────────────────────────────────────┐ │
//!                        │  │          Cross-Cutting Concerns           │ │
//!                        │  │  ┌────────┐ ┌─────────────┐ ┌──────────┐ │ │
//!                        │  │  │ config │ │   logging   │ │lifecycle │ │ │
//!                        │  │  │ (env)  │ │  (tracing)  │ │(shutdown)│ │ │
//!                        │  │  └────────┘ └─────────────┘ └──────────┘ │ │
//!                        │  └──────────────────────────────────────────┘ │
//!                        └───────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use issue_relay::config::loader::load_from_env;
use issue_relay::http::HttpServer;
use issue_relay::lifecycle::Shutdown;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Pick up a .env file when one is present; a bare environment is fine.
    let _ = dotenvy::dotenv();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "issue_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("issue-relay v0.1.0 starting");

    let config = load_from_env()?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        cors_origin = %config.cors.allowed_origin,
        jira_configured = config.jira.credentials().is_some(),
        generator_configured = config.generator.credentials().is_some(),
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Ctrl+C triggers graceful shutdown
    let shutdown = Shutdown::new();
    let signal_rx = shutdown.subscribe();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            shutdown.trigger();
        }
    });

    // Create and run HTTP server
    let server = HttpServer::new(config)?;
    server.run(listener, signal_rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
