//! # CowTracker Hex
//!
//! Application service layer and HTTP adapter for the CowTracker service.
//!
//! ## Architecture
//!
//! - `service` - Livestock records (orchestrates the repository port)
//! - `conversion` - Currency conversion and central bank series
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! `CowService` is generic over `R: CowRepository`; `ConversionService`
//! holds its rate and series sources as trait objects so the central bank
//! adapter can be swapped for a fake in tests.

pub mod conversion;
pub mod inbound;
pub mod openapi;
pub mod service;


pub use conversion::ConversionService;
pub use service::CowService;
