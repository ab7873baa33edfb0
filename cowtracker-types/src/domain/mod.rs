//! Domain models for the CowTracker service.

pub mod cow;
pub mod series;
pub mod trend;

pub use cow::{Cow, CowId, CowPatch, HealthStatus, NewCow};
pub use series::{SeriesInfo, SeriesObservation};
pub use trend::{SeriesTrend, TREND_THRESHOLD_PERCENT, TrendDirection};
