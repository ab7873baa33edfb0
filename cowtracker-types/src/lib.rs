//! # CowTracker Types
//!
//! Domain types and port traits for the CowTracker service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Pure domain types (Cow, series values, trends)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types
//!
//! Currency types and the conversion engine come from `exchange_rates`
//! and are re-exported here.

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Cow, CowId, CowPatch, HealthStatus, NewCow, SeriesInfo, SeriesObservation, SeriesTrend,
    TrendDirection,
};
pub use dto::*;
pub use error::{AppError, DomainError, RepoError};
pub use exchange_rates::{
    ConversionError, ConversionResult, CurrencyCode, RateObservation, RateProvenance,
    RateSource, RateSourceError,
};
pub use ports::{CowRepository, SeriesSource};
