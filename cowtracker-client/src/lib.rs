//! # CowTracker Client SDK
//!
//! A typed Rust client for the CowTracker API.

use chrono::NaiveDate;
use cowtracker_types::{
    ConversionResponse, Cow, CowId, CreateCowRequest, DeleteCowResponse, EconomicIndicators,
    HealthStatus, PriceTrends, SeriesInfo, SeriesResponse, UpdateCowRequest,
};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api {
        status: u16,
        kind: Option<String>,
        message: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CowTracker API client.
pub struct CowTrackerClient {
    base_url: String,
    http: Client,
}

impl CowTrackerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Cows
    // ─────────────────────────────────────────────────────────────────────────────

    pub async fn list_cows(&self) -> Result<Vec<Cow>, ClientError> {
        self.get("/cows", &[]).await
    }

    pub async fn get_cow(&self, id: CowId) -> Result<Cow, ClientError> {
        self.get(&format!("/cows/{}", id), &[]).await
    }

    pub async fn create_cow(&self, req: &CreateCowRequest) -> Result<Cow, ClientError> {
        let resp = self
            .http
            .post(self.url("/cows"))
            .json(req)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    pub async fn update_cow(&self, id: CowId, req: &UpdateCowRequest) -> Result<Cow, ClientError> {
        let resp = self
            .http
            .put(self.url(&format!("/cows/{}", id)))
            .json(req)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    pub async fn delete_cow(&self, id: CowId) -> Result<DeleteCowResponse, ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("/cows/{}", id)))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    pub async fn cows_by_breed(&self, breed: &str) -> Result<Vec<Cow>, ClientError> {
        self.get(&format!("/cows/breed/{}", breed), &[]).await
    }

    pub async fn cows_by_health(&self, status: HealthStatus) -> Result<Vec<Cow>, ClientError> {
        self.get(&format!("/cows/health/{}", status), &[]).await
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Central bank
    // ─────────────────────────────────────────────────────────────────────────────

    /// Converts `amount` between two currency codes.
    pub async fn convert(
        &self,
        amount: Decimal,
        from: &str,
        to: &str,
        date: Option<NaiveDate>,
    ) -> Result<ConversionResponse, ClientError> {
        let mut query = vec![
            ("amount", amount.to_string()),
            ("from", from.to_string()),
            ("to", to.to_string()),
        ];
        if let Some(date) = date {
            query.push(("date", date.to_string()));
        }
        self.get("/bcentral/convert", &query).await
    }

    pub async fn economic_indicators(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<EconomicIndicators, ClientError> {
        let query: Vec<_> = date.map(|d| ("date", d.to_string())).into_iter().collect();
        self.get("/bcentral/economic-indicators", &query).await
    }

    /// Dollar and UF trends over the `days` before `end_date`.
    pub async fn price_trends(
        &self,
        days: Option<u32>,
        end_date: Option<NaiveDate>,
    ) -> Result<PriceTrends, ClientError> {
        let mut query = Vec::new();
        if let Some(days) = days {
            query.push(("days", days.to_string()));
        }
        if let Some(end) = end_date {
            query.push(("end_date", end.to_string()));
        }
        self.get("/bcentral/trends", &query).await
    }

    pub async fn series_catalogue(&self) -> Result<Vec<SeriesInfo>, ClientError> {
        self.get("/bcentral/series", &[]).await
    }

    /// Values of any series between two dates.
    pub async fn series(
        &self,
        code: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<SeriesResponse, ClientError> {
        let mut query = Vec::new();
        if let Some(d) = start_date {
            query.push(("start_date", d.to_string()));
        }
        if let Some(d) = end_date {
            query.push(("end_date", d.to_string()));
        }
        self.get(&format!("/bcentral/series/{}", code), &query).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let resp = self.http.get(self.url(path)).query(query).send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        let body = resp.text().await?;
        if status.is_success() {
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(api_error(status.as_u16(), body))
        }
    }
}

/// Builds an `Api` error from an error body, falling back to the raw text.
fn api_error(status: u16, body: String) -> ClientError {
    let json = serde_json::from_str::<serde_json::Value>(&body).ok();
    let field = |name: &str| {
        json.as_ref()
            .and_then(|v| v.get(name))
            .and_then(|e| e.as_str())
            .map(String::from)
    };
    ClientError::Api {
        status,
        kind: field("kind"),
        message: field("error").unwrap_or(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CowTrackerClient::new("http://localhost:8000");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = CowTrackerClient::new("http://localhost:8000/");
        assert_eq!(client.url("/cows"), "http://localhost:8000/cows");
    }

    #[test]
    fn test_api_error_reads_json_body() {
        let err = api_error(
            503,
            r#"{"error":"Rate not available for EUR on 2024-06-01","kind":"RateUnavailable","code":503}"#
                .into(),
        );
        match err {
            ClientError::Api {
                status,
                kind,
                message,
            } => {
                assert_eq!(status, 503);
                assert_eq!(kind.as_deref(), Some("RateUnavailable"));
                assert_eq!(message, "Rate not available for EUR on 2024-06-01");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_api_error_plain_text_body() {
        let err = api_error(400, "Failed to deserialize query string".into());
        assert!(matches!(
            err,
            ClientError::Api { status: 400, kind: None, ref message } if message.starts_with("Failed")
        ));
    }
}
