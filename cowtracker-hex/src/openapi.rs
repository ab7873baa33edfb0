//! OpenAPI document for the HTTP API.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use cowtracker_types::domain::{
    Cow, CowId, HealthStatus, SeriesInfo, SeriesObservation, SeriesTrend, TrendDirection,
};
use cowtracker_types::dto::{
    ConversionResponse, ConvertQuery, CreateCowRequest, DeleteCowResponse, EconomicIndicators,
    IndicatorsQuery, PriceTrends, SeriesQuery, SeriesResponse, TrendsQuery, UpdateCowRequest,
};
use exchange_rates::{ConversionResult, CurrencyCode, CurrencyKind, RateObservation, RateProvenance};
use utoipa::OpenApi;

// Dummy functions to generate path documentation

/// Welcome message
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service is running", body = inline(serde_json::Value), example = json!({"message": "Welcome to CowTracker API", "status": "running"}))
    )
)]
async fn root() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy", "service": "CowTracker API"}))
    )
)]
async fn health() {}

/// List all cows
#[utoipa::path(
    get,
    path = "/cows",
    tag = "cows",
    responses(
        (status = 200, description = "All cows ordered by id", body = Vec<Cow>)
    )
)]
async fn list_cows() {}

/// Register a cow
#[utoipa::path(
    post,
    path = "/cows",
    tag = "cows",
    request_body = CreateCowRequest,
    responses(
        (status = 201, description = "Cow registered", body = Cow),
        (status = 400, description = "Empty name or breed, or non-positive weight")
    )
)]
async fn create_cow() {}

/// Get a cow by id
#[utoipa::path(
    get,
    path = "/cows/{id}",
    tag = "cows",
    params(("id" = u64, Path, description = "Cow id")),
    responses(
        (status = 200, description = "Cow details", body = Cow),
        (status = 404, description = "Cow not found")
    )
)]
async fn get_cow() {}

/// Update some fields of a cow
#[utoipa::path(
    put,
    path = "/cows/{id}",
    tag = "cows",
    params(("id" = u64, Path, description = "Cow id")),
    request_body = UpdateCowRequest,
    responses(
        (status = 200, description = "Updated cow", body = Cow),
        (status = 400, description = "Invalid field values"),
        (status = 404, description = "Cow not found")
    )
)]
async fn update_cow() {}

/// Delete a cow
#[utoipa::path(
    delete,
    path = "/cows/{id}",
    tag = "cows",
    params(("id" = u64, Path, description = "Cow id")),
    responses(
        (status = 200, description = "Cow deleted", body = DeleteCowResponse),
        (status = 404, description = "Cow not found")
    )
)]
async fn delete_cow() {}

/// Cows of a breed
#[utoipa::path(
    get,
    path = "/cows/breed/{breed}",
    tag = "cows",
    params(("breed" = String, Path, description = "Breed, case-insensitive")),
    responses(
        (status = 200, description = "Matching cows", body = Vec<Cow>)
    )
)]
async fn cows_by_breed() {}

/// Cows in a health state
#[utoipa::path(
    get,
    path = "/cows/health/{status}",
    tag = "cows",
    params(("status" = HealthStatus, Path, description = "healthy, sick or under_treatment")),
    responses(
        (status = 200, description = "Matching cows", body = Vec<Cow>),
        (status = 400, description = "Unknown health status")
    )
)]
async fn cows_by_health() {}

/// Convert an amount between two currencies
#[utoipa::path(
    get,
    path = "/bcentral/convert",
    tag = "central-bank",
    params(ConvertQuery),
    responses(
        (status = 200, description = "Converted amount", body = ConversionResponse),
        (status = 400, description = "Unsupported currency"),
        (status = 503, description = "Rate not available")
    )
)]
async fn convert() {}

/// USD/CLP exchange rate series
#[utoipa::path(
    get,
    path = "/bcentral/exchange-rate",
    tag = "central-bank",
    params(SeriesQuery),
    responses(
        (status = 200, description = "Series values", body = SeriesResponse),
        (status = 503, description = "Central bank unavailable")
    )
)]
async fn exchange_rate() {}

/// Unidad de Fomento series
#[utoipa::path(
    get,
    path = "/bcentral/uf",
    tag = "central-bank",
    params(SeriesQuery),
    responses(
        (status = 200, description = "Series values", body = SeriesResponse),
        (status = 503, description = "Central bank unavailable")
    )
)]
async fn uf() {}

/// Unidad Tributaria Mensual series
#[utoipa::path(
    get,
    path = "/bcentral/utm",
    tag = "central-bank",
    params(SeriesQuery),
    responses(
        (status = 200, description = "Series values", body = SeriesResponse),
        (status = 503, description = "Central bank unavailable")
    )
)]
async fn utm() {}

/// Latest dollar, UF and UTM values
#[utoipa::path(
    get,
    path = "/bcentral/economic-indicators",
    tag = "central-bank",
    params(IndicatorsQuery),
    responses(
        (status = 200, description = "Indicators; unavailable ones are null", body = EconomicIndicators)
    )
)]
async fn economic_indicators() {}

/// Dollar and UF trends with pricing advice
#[utoipa::path(
    get,
    path = "/bcentral/trends",
    tag = "central-bank",
    params(TrendsQuery),
    responses(
        (status = 200, description = "Trend summaries", body = PriceTrends),
        (status = 400, description = "Invalid period"),
        (status = 503, description = "Central bank unavailable")
    )
)]
async fn price_trends() {}

/// Commonly used series
#[utoipa::path(
    get,
    path = "/bcentral/series",
    tag = "central-bank",
    responses(
        (status = 200, description = "Series catalogue", body = Vec<SeriesInfo>)
    )
)]
async fn series_catalogue() {}

/// Any series by code
#[utoipa::path(
    get,
    path = "/bcentral/series/{code}",
    tag = "central-bank",
    params(
        ("code" = String, Path, description = "Series code, e.g. F072.IPC.PRE.Z.M"),
        SeriesQuery
    ),
    responses(
        (status = 200, description = "Series values", body = SeriesResponse),
        (status = 400, description = "Invalid date range"),
        (status = 503, description = "Central bank unavailable")
    )
)]
async fn custom_series() {}

/// OpenAPI documentation for the CowTracker API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CowTracker API",
        version = "1.0.0",
        description = "Livestock records plus currency conversion and economic series from the Central Bank of Chile.\n\nEvery conversion pivots through the Chilean peso. Results carry a `source` field: `primary` for live rates, `approximate-fallback` when a static rate was substituted.",
        license(name = "MIT"),
    ),
    paths(
        root,
        health,
        list_cows,
        create_cow,
        get_cow,
        update_cow,
        delete_cow,
        cows_by_breed,
        cows_by_health,
        convert,
        exchange_rate,
        uf,
        utm,
        economic_indicators,
        price_trends,
        series_catalogue,
        custom_series,
    ),
    components(
        schemas(
            Cow,
            CowId,
            HealthStatus,
            CreateCowRequest,
            UpdateCowRequest,
            DeleteCowResponse,
            ConversionResponse,
            ConversionResult,
            RateProvenance,
            CurrencyCode,
            CurrencyKind,
            RateObservation,
            SeriesObservation,
            SeriesInfo,
            SeriesResponse,
            EconomicIndicators,
            PriceTrends,
            SeriesTrend,
            TrendDirection,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "cows", description = "Livestock records"),
        (name = "central-bank", description = "Conversions and economic series"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();

        assert!(paths.contains(&"/cows/{id}".to_string()));
        assert!(paths.contains(&"/bcentral/convert".to_string()));
        assert!(paths.contains(&"/bcentral/series/{code}".to_string()));
        assert!(paths.contains(&"/bcentral/trends".to_string()));
    }
}
