//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, body limit, CORS)
//! - Construct the upstream clients shared through AppState
//! - Bind the server to a listener and run until shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::http::handlers;
use crate::http::request::UuidRequestId;
use crate::upstream::{GeneratorClient, JiraClient};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub jira: JiraClient,
    pub generator: GeneratorClient,
}

/// Errors that can occur while assembling the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The configured CORS origin is not a usable header value.
    #[error("invalid CORS origin: {0:?}")]
    InvalidCorsOrigin(String),

    /// An upstream HTTP client could not be constructed.
    #[error("failed to build upstream HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, ServerError> {
        let jira = JiraClient::new(
            config.jira.clone(),
            Duration::from_secs(config.timeouts.upstream_secs),
        )?;
        let generator = GeneratorClient::new(
            config.generator.clone(),
            Duration::from_secs(config.timeouts.generator_secs),
        )?;

        let state = AppState {
            config: Arc::new(config),
            jira,
            generator,
        };

        let router = Self::build_router(state)?;
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Result<Router, ServerError> {
        let config = state.config.clone();

        let origin = HeaderValue::from_str(&config.cors.allowed_origin)
            .map_err(|_| ServerError::InvalidCorsOrigin(config.cors.allowed_origin.clone()))?;
        let cors = CorsLayer::new()
            .allow_origin(origin)
            .allow_credentials(true)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        Ok(Router::new()
            .route("/api/health", get(handlers::health))
            .route("/api/generate-tests", post(handlers::generate_tests))
            .route("/api/jira/fetch", post(handlers::fetch_issue))
            .fallback(handlers::not_found)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                    .layer(TraceLayer::new_for_http())
                    .layer(RequestBodyLimitLayer::new(config.listener.max_body_bytes))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(cors)
                    .layer(PropagateRequestIdLayer::x_request_id()),
            ))
    }

    /// Run the server, accepting connections until the shutdown signal.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
