//! In-memory repository adapter.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use cowtracker_types::{Cow, CowId, CowPatch, CowRepository, HealthStatus, NewCow, RepoError};

// ─────────────────────────────────────────────────────────────────────────────
// In-Memory Repository
// ─────────────────────────────────────────────────────────────────────────────

/// Livestock store keyed by id.
///
/// New ids are one above the highest id currently stored, so an id freed by
/// deleting the newest cow is handed out again.
#[derive(Default)]
pub struct InMemoryCowRepo {
    cows: RwLock<BTreeMap<CowId, Cow>>,
}

impl InMemoryCowRepo {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `cows` with ids 1, 2, 3...
    ///
    /// Invalid entries are skipped with a warning.
    pub fn with_cows(cows: Vec<NewCow>) -> Self {
        let mut map = BTreeMap::new();
        let mut id = CowId::new(1);
        for fields in cows {
            match Cow::new(id, fields) {
                Ok(cow) => {
                    map.insert(id, cow);
                    id = id.next();
                }
                Err(e) => warn!("Skipping invalid seed cow: {}", e),
            }
        }
        Self {
            cows: RwLock::new(map),
        }
    }
}

#[async_trait]
impl CowRepository for InMemoryCowRepo {
    async fn list_cows(&self) -> Result<Vec<Cow>, RepoError> {
        Ok(self.cows.read().await.values().cloned().collect())
    }

    async fn get_cow(&self, id: CowId) -> Result<Option<Cow>, RepoError> {
        Ok(self.cows.read().await.get(&id).cloned())
    }

    async fn create_cow(&self, cow: NewCow) -> Result<Cow, RepoError> {
        let mut cows = self.cows.write().await;
        let id = cows
            .keys()
            .next_back()
            .map(CowId::next)
            .unwrap_or_else(|| CowId::new(1));

        let cow = Cow::new(id, cow)?;
        cows.insert(id, cow.clone());
        debug!(cow_id = %id, "Stored cow");
        Ok(cow)
    }

    async fn update_cow(&self, id: CowId, patch: CowPatch) -> Result<Option<Cow>, RepoError> {
        let mut cows = self.cows.write().await;
        let Some(cow) = cows.get_mut(&id) else {
            return Ok(None);
        };
        cow.apply(patch)?;
        Ok(Some(cow.clone()))
    }

    async fn delete_cow(&self, id: CowId) -> Result<Option<Cow>, RepoError> {
        Ok(self.cows.write().await.remove(&id))
    }

    async fn find_by_breed(&self, breed: &str) -> Result<Vec<Cow>, RepoError> {
        Ok(self
            .cows
            .read()
            .await
            .values()
            .filter(|cow| cow.is_breed(breed))
            .cloned()
            .collect())
    }

    async fn find_by_health(&self, status: HealthStatus) -> Result<Vec<Cow>, RepoError> {
        Ok(self
            .cows
            .read()
            .await
            .values()
            .filter(|cow| cow.health_status == status)
            .cloned()
            .collect())
    }
}
