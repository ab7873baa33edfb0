//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;

use cowtracker_types::{
    AppError, ConvertQuery, CowId, CowRepository, CreateCowRequest, CurrencyCode,
    DeleteCowResponse, DomainError, HealthStatus, IndicatorsQuery, SeriesQuery, TrendsQuery,
    UpdateCowRequest,
};

use crate::openapi::ApiDoc;
use crate::{ConversionService, CowService};

/// Application state shared across handlers.
pub struct AppState<R: CowRepository> {
    pub cows: CowService<R>,
    pub conversion: ConversionService,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AppError::BadRequest(_) | AppError::UnsupportedCurrency(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::RateUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::warn!(error = %self.0, "Request failed");
        }

        let body = serde_json::json!({
            "error": self.0.to_string(),
            "kind": self.0.kind(),
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

fn parse_id(id: &str) -> Result<CowId, ApiError> {
    id.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid cow ID: {}", id)).into())
}

// ─────────────────────────────────────────────────────────────────────────────
// Service
// ─────────────────────────────────────────────────────────────────────────────

pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Welcome to CowTracker API",
        "status": "running"
    }))
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy", "service": "CowTracker API" }))
}

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

// ─────────────────────────────────────────────────────────────────────────────
// Cows
// ─────────────────────────────────────────────────────────────────────────────

#[tracing::instrument(skip(state))]
pub async fn list_cows<R: CowRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.cows.list_cows().await?))
}

#[tracing::instrument(skip(state), fields(name = %req.name))]
pub async fn create_cow<R: CowRepository>(
    State(state): State<Arc<AppState<R>>>,
    Json(req): Json<CreateCowRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cow = state.cows.create_cow(req).await?;
    Ok((StatusCode::CREATED, Json(cow)))
}

#[tracing::instrument(skip(state), fields(cow_id = %id))]
pub async fn get_cow<R: CowRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cow = state.cows.get_cow(parse_id(&id)?).await?;
    Ok(Json(cow))
}

#[tracing::instrument(skip(state, req), fields(cow_id = %id))]
pub async fn update_cow<R: CowRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCowRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cow = state.cows.update_cow(parse_id(&id)?, req).await?;
    Ok(Json(cow))
}

#[tracing::instrument(skip(state), fields(cow_id = %id))]
pub async fn delete_cow<R: CowRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cow = state.cows.delete_cow(parse_id(&id)?).await?;
    Ok(Json(DeleteCowResponse {
        message: format!("Cow {} deleted", cow.name),
    }))
}

#[tracing::instrument(skip(state))]
pub async fn cows_by_breed<R: CowRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(breed): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.cows.cows_by_breed(&breed).await?))
}

#[tracing::instrument(skip(state))]
pub async fn cows_by_health<R: CowRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(status): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let status: HealthStatus = status
        .parse()
        .map_err(|e: DomainError| AppError::BadRequest(e.to_string()))?;
    Ok(Json(state.cows.cows_by_health(status).await?))
}

// ─────────────────────────────────────────────────────────────────────────────
// Central bank
// ─────────────────────────────────────────────────────────────────────────────

#[tracing::instrument(skip(state))]
pub async fn convert<R: CowRepository>(
    State(state): State<Arc<AppState<R>>>,
    Query(query): Query<ConvertQuery>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.conversion.convert(query).await?))
}

#[tracing::instrument(skip(state))]
pub async fn exchange_rate<R: CowRepository>(
    State(state): State<Arc<AppState<R>>>,
    Query(query): Query<SeriesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let series = state
        .conversion
        .currency_series(CurrencyCode::USD, query)
        .await?;
    Ok(Json(series))
}

#[tracing::instrument(skip(state))]
pub async fn uf<R: CowRepository>(
    State(state): State<Arc<AppState<R>>>,
    Query(query): Query<SeriesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let series = state
        .conversion
        .currency_series(CurrencyCode::UF, query)
        .await?;
    Ok(Json(series))
}

#[tracing::instrument(skip(state))]
pub async fn utm<R: CowRepository>(
    State(state): State<Arc<AppState<R>>>,
    Query(query): Query<SeriesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let series = state
        .conversion
        .currency_series(CurrencyCode::UTM, query)
        .await?;
    Ok(Json(series))
}

#[tracing::instrument(skip(state))]
pub async fn economic_indicators<R: CowRepository>(
    State(state): State<Arc<AppState<R>>>,
    Query(query): Query<IndicatorsQuery>,
) -> impl IntoResponse {
    Json(state.conversion.economic_indicators(query.date).await)
}

#[tracing::instrument(skip(state))]
pub async fn price_trends<R: CowRepository>(
    State(state): State<Arc<AppState<R>>>,
    Query(query): Query<TrendsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.conversion.price_trends(query).await?))
}

pub async fn series_catalogue<R: CowRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> impl IntoResponse {
    Json(state.conversion.series_catalogue())
}

#[tracing::instrument(skip(state))]
pub async fn custom_series<R: CowRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(code): Path<String>,
    Query(query): Query<SeriesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.conversion.series(&code, query).await?))
}
