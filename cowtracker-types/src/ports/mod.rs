//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.
//! The rate lookup port lives in `exchange_rates` next to the engine that consumes it.

mod repository;
mod series;

pub use repository::CowRepository;
pub use series::SeriesSource;
