//! Livestock repository port.

use crate::domain::{Cow, CowId, CowPatch, HealthStatus, NewCow};
use crate::error::RepoError;

/// Storage port for livestock records.
#[async_trait::async_trait]
pub trait CowRepository: Send + Sync + 'static {
    /// Lists all cows ordered by id.
    async fn list_cows(&self) -> Result<Vec<Cow>, RepoError>;

    /// Gets a cow by id.
    async fn get_cow(&self, id: CowId) -> Result<Option<Cow>, RepoError>;

    /// Stores a new cow under the next free id.
    async fn create_cow(&self, cow: NewCow) -> Result<Cow, RepoError>;

    /// Applies a partial update; `Ok(None)` if the cow does not exist.
    async fn update_cow(&self, id: CowId, patch: CowPatch) -> Result<Option<Cow>, RepoError>;

    /// Removes a cow, returning it; `Ok(None)` if it did not exist.
    async fn delete_cow(&self, id: CowId) -> Result<Option<Cow>, RepoError>;

    /// Lists cows of a breed (case-insensitive).
    async fn find_by_breed(&self, breed: &str) -> Result<Vec<Cow>, RepoError>;

    /// Lists cows in a health state.
    async fn find_by_health(&self, status: HealthStatus) -> Result<Vec<Cow>, RepoError>;
}
