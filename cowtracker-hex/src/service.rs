//! Livestock Application Service
//!
//! Orchestrates domain operations through the repository port.
//! Contains NO infrastructure logic - pure business orchestration.

use cowtracker_types::{
    AppError, Cow, CowId, CowRepository, CreateCowRequest, HealthStatus, UpdateCowRequest,
};
use tracing::info;

/// Application service for livestock records.
pub struct CowService<R: CowRepository> {
    repo: R,
}

impl<R: CowRepository> CowService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub async fn list_cows(&self) -> Result<Vec<Cow>, AppError> {
        self.repo.list_cows().await.map_err(Into::into)
    }

    pub async fn get_cow(&self, id: CowId) -> Result<Cow, AppError> {
        self.repo
            .get_cow(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Registers a cow under the next free id.
    pub async fn create_cow(&self, req: CreateCowRequest) -> Result<Cow, AppError> {
        let cow = self.repo.create_cow(req.into()).await?;
        info!(cow_id = %cow.id, name = %cow.name, "Registered cow");
        Ok(cow)
    }

    /// Updates only the fields present in `req`.
    pub async fn update_cow(&self, id: CowId, req: UpdateCowRequest) -> Result<Cow, AppError> {
        self.repo
            .update_cow(id, req.into())
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Removes a cow and returns it.
    pub async fn delete_cow(&self, id: CowId) -> Result<Cow, AppError> {
        let cow = self
            .repo
            .delete_cow(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        info!(cow_id = %id, name = %cow.name, "Removed cow");
        Ok(cow)
    }

    pub async fn cows_by_breed(&self, breed: &str) -> Result<Vec<Cow>, AppError> {
        self.repo.find_by_breed(breed).await.map_err(Into::into)
    }

    pub async fn cows_by_health(&self, status: HealthStatus) -> Result<Vec<Cow>, AppError> {
        self.repo.find_by_health(status).await.map_err(Into::into)
    }
}

fn not_found(id: CowId) -> AppError {
    AppError::NotFound(format!("Cow not found: {}", id))
}
