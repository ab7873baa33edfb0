//! # CowTracker Repository
//!
//! Concrete repository implementations (adapters) for the CowTracker service.
//! Livestock records are kept in process memory; nothing is persisted.

pub mod memory;

#[cfg(test)]
mod memory_tests;

pub use memory::InMemoryCowRepo;

use cowtracker_types::{HealthStatus, NewCow};

/// Build a repository pre-loaded with the starter herd.
pub fn build_repo() -> InMemoryCowRepo {
    InMemoryCowRepo::with_cows(starter_herd())
}

/// The three animals every fresh instance starts with.
pub fn starter_herd() -> Vec<NewCow> {
    vec![
        NewCow {
            name: "Bessie".into(),
            breed: "Holstein".into(),
            age: 3,
            weight: 650.5,
            health_status: HealthStatus::Healthy,
        },
        NewCow {
            name: "Daisy".into(),
            breed: "Jersey".into(),
            age: 2,
            weight: 450.0,
            health_status: HealthStatus::Healthy,
        },
        NewCow {
            name: "Moo".into(),
            breed: "Angus".into(),
            age: 4,
            weight: 800.0,
            health_status: HealthStatus::Sick,
        },
    ]
}
