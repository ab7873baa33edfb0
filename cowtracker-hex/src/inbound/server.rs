//! HTTP Server configuration and startup.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use cowtracker_types::CowRepository;

use super::handlers::{self, AppState};
use super::rate_limit::{RateLimiterState, rate_limit_middleware};
use crate::{ConversionService, CowService};

/// HTTP Server for the CowTracker API.
pub struct HttpServer<R: CowRepository> {
    state: Arc<AppState<R>>,
    rate_limiter: Arc<RateLimiterState>,
    cors_origins: Vec<String>,
}

impl<R: CowRepository> HttpServer<R> {
    /// Creates a server allowing 100 requests per minute per client from any origin.
    pub fn new(cows: CowService<R>, conversion: ConversionService) -> Self {
        Self {
            state: Arc::new(AppState { cows, conversion }),
            rate_limiter: Arc::new(RateLimiterState::default()),
            cors_origins: vec!["*".to_string()],
        }
    }

    /// Sets the per-client request quota.
    pub fn with_rate_limit(mut self, requests_per_minute: u32) -> Self {
        self.rate_limiter = Arc::new(RateLimiterState::new(
            requests_per_minute,
            Duration::from_secs(60),
        ));
        self
    }

    /// Restricts CORS to the given origins; `*` allows any.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }

    fn cors_layer(&self) -> CorsLayer {
        let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
        if self.cors_origins.iter().any(|o| o == "*") {
            return layer.allow_origin(Any);
        }

        let origins: Vec<HeaderValue> = self
            .cors_origins
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        layer.allow_origin(origins)
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Uses the globally set MeterProvider
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        Router::new()
            .route("/", get(handlers::root))
            .route("/health", get(handlers::health))
            .route("/api-docs/openapi.json", get(handlers::openapi_json))
            .route(
                "/cows",
                get(handlers::list_cows::<R>).post(handlers::create_cow::<R>),
            )
            .route(
                "/cows/{id}",
                get(handlers::get_cow::<R>)
                    .put(handlers::update_cow::<R>)
                    .delete(handlers::delete_cow::<R>),
            )
            .route("/cows/breed/{breed}", get(handlers::cows_by_breed::<R>))
            .route("/cows/health/{status}", get(handlers::cows_by_health::<R>))
            .route("/bcentral/convert", get(handlers::convert::<R>))
            .route("/bcentral/exchange-rate", get(handlers::exchange_rate::<R>))
            .route("/bcentral/uf", get(handlers::uf::<R>))
            .route("/bcentral/utm", get(handlers::utm::<R>))
            .route(
                "/bcentral/economic-indicators",
                get(handlers::economic_indicators::<R>),
            )
            .route("/bcentral/trends", get(handlers::price_trends::<R>))
            .route("/bcentral/series", get(handlers::series_catalogue::<R>))
            .route("/bcentral/series/{code}", get(handlers::custom_series::<R>))
            .layer(metrics)
            .layer(middleware::from_fn_with_state(
                self.rate_limiter.clone(),
                rate_limit_middleware,
            ))
            .layer(self.cors_layer())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
