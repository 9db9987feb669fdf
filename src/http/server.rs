//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router: health fast-path + catch-all forwarding
//! - Wire up middleware (request ID, tracing)
//! - Drive the serve loop with graceful shutdown
//! - Apply the access-log policy (API traffic and failures only)

use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::ProxyConfig;
use crate::forward::{self, ForwardError, UpstreamClient};
use crate::http::health;
use crate::http::request::{RequestIdLayer, X_REQUEST_ID};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: UpstreamClient,
    pub config: Arc<ProxyConfig>,
}

/// HTTP server for the proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Self {
        let state = AppState {
            client: forward::upstream_client(),
            config: Arc::new(config.clone()),
        };
        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", any(health::health))
            .route("/health", any(health::health))
            .fallback(proxy_handler)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(RequestIdLayer)
                    .layer(TraceLayer::new_for_http()),
            )
    }

    /// Run the server on the given listener until shutdown is signalled.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            backend = %self.config.backend.origin(),
            "Reverse proxy listening"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }
}

/// Catch-all handler: everything that is not a health probe is relayed.
async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response<Body> {
    let started = Instant::now();
    let request_id = request
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    match forward::forward(&state.client, &state.config, request).await {
        Ok(response) => {
            log_relayed(&state.config, &request_id, method.as_str(), &path, response.status(), started);
            response
        }
        // Backend application errors are relayed, never masked as proxy failures.
        Err(ForwardError::Application { status, response }) => {
            log_relayed(&state.config, &request_id, method.as_str(), &path, status, started);
            response
        }
        Err(err @ (ForwardError::Unavailable { .. } | ForwardError::Timeout { .. })) => {
            tracing::error!(
                request_id = %request_id,
                method = %method,
                path = %path,
                error = %err,
                "Forwarding failed"
            );
            forward::service_unavailable(&err.to_string())
        }
    }
}

/// Access-log policy: API traffic at info, everything else at debug, so
/// frequent probe traffic stays out of the operational log.
fn log_relayed(
    config: &ProxyConfig,
    request_id: &str,
    method: &str,
    path: &str,
    status: StatusCode,
    started: Instant,
) {
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if path.contains(&config.observability.api_log_prefix) {
        tracing::info!(
            request_id,
            method,
            path,
            status = status.as_u16(),
            elapsed_ms,
            "Request relayed"
        );
    } else {
        tracing::debug!(
            request_id,
            method,
            path,
            status = status.as_u16(),
            elapsed_ms,
            "Request relayed"
        );
    }
}
