//! HTTP client for the statistics web service.

use async_trait::async_trait;
use chrono::NaiveDate;
use cowtracker_types::{SeriesInfo, SeriesObservation, SeriesSource};
use exchange_rates::{CurrencyCode, RateObservation, RateSource, RateSourceError};
use reqwest::{Client, Url};
use tracing::{info, instrument, warn};

use crate::BCentralConfig;
use crate::response::{decode, latest_on_or_before};
use crate::series::{self, Frequency};

const ISO_DATE: &str = "%Y-%m-%d";

/// Central bank statistics client.
pub struct BCentralClient {
    config: BCentralConfig,
    http: Client,
}

impl BCentralClient {
    /// Creates a client whose requests are bounded by `config.timeout`.
    pub fn new(config: BCentralConfig) -> Result<Self, RateSourceError> {
        if !config.has_credentials() {
            warn!("Central bank credentials are not configured; every lookup will fail");
        }
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RateSourceError::Transport(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &BCentralConfig {
        &self.config
    }

    /// `GetSeries` URL for `code` between two dates, inclusive.
    pub fn build_url(
        &self,
        code: &str,
        first: NaiveDate,
        last: NaiveDate,
    ) -> Result<Url, RateSourceError> {
        let (Some(user), Some(pass)) = (&self.config.user, &self.config.password) else {
            return Err(RateSourceError::MissingCredentials);
        };
        let first = first.format(ISO_DATE).to_string();
        let last = last.format(ISO_DATE).to_string();

        Url::parse_with_params(
            &self.config.base_url,
            [
                ("user", user.as_str()),
                ("pass", pass.as_str()),
                ("firstdate", first.as_str()),
                ("lastdate", last.as_str()),
                ("timeseries", code),
                ("function", "GetSeries"),
            ],
        )
        .map_err(|e| RateSourceError::Transport(format!("Invalid base URL: {}", e)))
    }

    async fn get_series(
        &self,
        code: &str,
        first: NaiveDate,
        last: NaiveDate,
    ) -> Result<Vec<SeriesObservation>, RateSourceError> {
        if !self.config.has_credentials() {
            return Err(RateSourceError::MissingCredentials);
        }
        let url = self.build_url(code, first, last)?;

        info!(series = code, %first, %last, "Querying central bank");

        // The query string carries the credentials.
        let transport =
            |e: reqwest::Error| RateSourceError::Transport(e.without_url().to_string());
        let resp = self.http.get(url).send().await.map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(RateSourceError::Transport(format!("HTTP status {}", status)));
        }
        let body = resp.text().await.map_err(transport)?;

        decode(code, &body)
    }
}

#[async_trait]
impl SeriesSource for BCentralClient {
    #[instrument(skip(self))]
    async fn fetch_series(
        &self,
        code: &str,
        first: NaiveDate,
        last: NaiveDate,
    ) -> Result<Vec<SeriesObservation>, RateSourceError> {
        self.get_series(code, first, last).await.inspect_err(|e| {
            warn!(error = %e, "Series query failed");
        })
    }

    fn catalogue(&self) -> Vec<SeriesInfo> {
        series::catalogue()
    }

    fn series_for(&self, currency: CurrencyCode) -> Option<&'static str> {
        series::series_for(currency)
    }
}

#[async_trait]
impl RateSource for BCentralClient {
    #[instrument(skip(self))]
    async fn lookup_rate(
        &self,
        currency: CurrencyCode,
        date: NaiveDate,
    ) -> Result<Option<RateObservation>, RateSourceError> {
        let Some(code) = series::series_for(currency) else {
            return Ok(None);
        };
        let first = Frequency::of(code).window_start(date);

        let observations = self.fetch_series(code, first, date).await?;

        Ok(latest_on_or_before(&observations, date)
            .map(|obs| RateObservation::new(currency, obs.date, obs.value)))
    }
}
