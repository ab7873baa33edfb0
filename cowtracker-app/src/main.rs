//! # CowTracker Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize logging and (optionally) OpenTelemetry export
//! - Build the repository and the central bank adapter
//! - Start the HTTP server

mod config;

use std::sync::Arc;

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use bcentral::BCentralClient;
use config::{Config, LogFormat};
use cowtracker_hex::{ConversionService, CowService, inbound::HttpServer};
use cowtracker_repo::build_repo;
use exchange_rates::{CurrencyCode, FallbackRate};

fn init_tracer() -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("cowtracker-service"), provider))
}

fn init_logging(config: &Config) -> anyhow::Result<Option<sdktrace::SdkTracerProvider>> {
    let fmt_layer: Box<dyn Layer<Registry> + Send + Sync> = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    let (telemetry, provider) = if config.otel_enabled {
        let (tracer, provider) = init_tracer()?;
        (
            Some(tracing_opentelemetry::layer().with_tracer(tracer)),
            Some(provider),
        )
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cowtracker_app=debug,cowtracker_hex=debug".into()),
        )
        .with(telemetry)
        .init();

    Ok(provider)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    let otel_provider = init_logging(&config)?;

    tracing::info!("Starting CowTracker server on {}", config.addr());
    tracing::info!("Central bank endpoint: {}", config.bcentral.base_url);

    let fallback = config
        .fallback_usd_rate
        .map(|rate| FallbackRate::new(CurrencyCode::USD, rate))
        .transpose()?;
    match &fallback {
        Some(f) => tracing::info!(rate = %f.local_per_unit(), "Approximate USD fallback enabled"),
        None => tracing::info!("No fallback rate configured"),
    }

    let bank = Arc::new(BCentralClient::new(config.bcentral.clone())?);
    let conversion = ConversionService::new(bank.clone(), bank).with_fallback(fallback);
    let cows = CowService::new(build_repo());

    let server = HttpServer::new(cows, conversion)
        .with_rate_limit(config.rate_limit_per_minute)
        .with_cors_origins(config.cors_origins.clone());

    server.run(&config.addr()).await?;

    // Ensure traces are flushed before exit
    if let Some(provider) = otel_provider {
        let _ = provider.shutdown();
    }
    Ok(())
}
