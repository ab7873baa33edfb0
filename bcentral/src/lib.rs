//! # Central Bank Adapter
//!
//! Talks to the central bank's `SieteRestWS` statistics web service and
//! exposes it through two ports:
//!
//! - [`RateSource`](exchange_rates::RateSource) for the conversion engine;
//! - [`SeriesSource`](cowtracker_types::SeriesSource) for raw series queries.
//!
//! Every value is quoted in Chilean pesos, which is why the local currency
//! itself is never looked up.

mod client;
mod config;
mod response;
mod series;

pub use client::BCentralClient;
pub use config::{BCentralConfig, DEFAULT_BASE_URL};
pub use series::{Frequency, catalogue, series_for};
