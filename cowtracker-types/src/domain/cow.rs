//! Livestock record domain model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::DomainError;

/// Unique identifier for a Cow.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct CowId(u64);

impl CowId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The id following this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for CowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CowId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Health state of an animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    #[default]
    Healthy,
    Sick,
    UnderTreatment,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Sick => "sick",
            HealthStatus::UnderTreatment => "under_treatment",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HealthStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "healthy" => Ok(HealthStatus::Healthy),
            "sick" => Ok(HealthStatus::Sick),
            "under_treatment" => Ok(HealthStatus::UnderTreatment),
            other => Err(DomainError::ValidationError(format!(
                "Unknown health status: {}",
                other
            ))),
        }
    }
}

/// A tracked animal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Cow {
    pub id: CowId,
    #[schema(example = "Bessie")]
    pub name: String,
    #[schema(example = "Holstein")]
    pub breed: String,
    /// Age in years
    #[schema(example = 3)]
    pub age: u32,
    /// Weight in kilograms
    #[schema(example = 650.5)]
    pub weight: f64,
    pub health_status: HealthStatus,
}

/// Field values for a new animal.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCow {
    pub name: String,
    pub breed: String,
    pub age: u32,
    pub weight: f64,
    pub health_status: HealthStatus,
}

/// Partial modification of an animal; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CowPatch {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub health_status: Option<HealthStatus>,
}

impl Cow {
    /// Creates a cow with the given id.
    ///
    /// # Validation
    /// - Name and breed cannot be empty
    /// - Weight must be positive
    pub fn new(id: CowId, fields: NewCow) -> Result<Self, DomainError> {
        let cow = Self {
            id,
            name: fields.name,
            breed: fields.breed,
            age: fields.age,
            weight: fields.weight,
            health_status: fields.health_status,
        };
        cow.validate()?;
        Ok(cow)
    }

    /// Applies a patch, leaving the cow unchanged if the result is invalid.
    pub fn apply(&mut self, patch: CowPatch) -> Result<(), DomainError> {
        let mut updated = self.clone();
        if let Some(name) = patch.name {
            updated.name = name;
        }
        if let Some(breed) = patch.breed {
            updated.breed = breed;
        }
        if let Some(age) = patch.age {
            updated.age = age;
        }
        if let Some(weight) = patch.weight {
            updated.weight = weight;
        }
        if let Some(status) = patch.health_status {
            updated.health_status = status;
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Case-insensitive breed match.
    pub fn is_breed(&self, breed: &str) -> bool {
        self.breed.eq_ignore_ascii_case(breed.trim())
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::ValidationError("Cow name cannot be empty".into()));
        }
        if self.breed.trim().is_empty() {
            return Err(DomainError::ValidationError("Cow breed cannot be empty".into()));
        }
        if !(self.weight.is_finite() && self.weight > 0.0) {
            return Err(DomainError::ValidationError("Weight must be positive".into()));
        }
        Ok(())
    }
}
