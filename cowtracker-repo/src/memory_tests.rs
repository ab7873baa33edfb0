//! In-memory repository tests.

#[cfg(test)]
mod tests {
    use cowtracker_types::{
        CowId, CowPatch, CowRepository, DomainError, HealthStatus, NewCow, RepoError,
    };

    use crate::{InMemoryCowRepo, build_repo};

    fn new_cow(name: &str, breed: &str) -> NewCow {
        NewCow {
            name: name.to_string(),
            breed: breed.to_string(),
            age: 1,
            weight: 300.0,
            health_status: HealthStatus::Healthy,
        }
    }

    #[tokio::test]
    async fn test_starter_herd() {
        let repo = build_repo();

        let cows = repo.list_cows().await.unwrap();

        let names: Vec<_> = cows.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bessie", "Daisy", "Moo"]);
        assert_eq!(cows[2].id, CowId::new(3));
        assert_eq!(cows[2].health_status, HealthStatus::Sick);
    }

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let repo = build_repo();

        let cow = repo.create_cow(new_cow("Lola", "Hereford")).await.unwrap();

        assert_eq!(cow.id, CowId::new(4));
        assert_eq!(repo.list_cows().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_create_in_empty_repo_starts_at_one() {
        let repo = InMemoryCowRepo::new();

        let cow = repo.create_cow(new_cow("Lola", "Hereford")).await.unwrap();

        assert_eq!(cow.id, CowId::new(1));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_cow() {
        let repo = InMemoryCowRepo::new();

        let result = repo.create_cow(new_cow("", "Hereford")).await;

        assert!(matches!(
            result,
            Err(RepoError::Domain(DomainError::ValidationError(_)))
        ));
        assert!(repo.list_cows().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_cow_not_found() {
        let repo = build_repo();

        assert!(repo.get_cow(CowId::new(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_cow() {
        let repo = build_repo();

        let updated = repo
            .update_cow(
                CowId::new(3),
                CowPatch {
                    health_status: Some(HealthStatus::Healthy),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Moo");
        assert_eq!(updated.health_status, HealthStatus::Healthy);
        let stored = repo.get_cow(CowId::new(3)).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_missing_cow() {
        let repo = build_repo();

        let result = repo
            .update_cow(CowId::new(42), CowPatch::default())
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_cow() {
        let repo = build_repo();

        let removed = repo.delete_cow(CowId::new(1)).await.unwrap().unwrap();

        assert_eq!(removed.name, "Bessie");
        assert!(repo.get_cow(CowId::new(1)).await.unwrap().is_none());
        assert!(repo.delete_cow(CowId::new(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_filters() {
        let repo = build_repo();

        let jerseys = repo.find_by_breed("JERSEY").await.unwrap();
        assert_eq!(jerseys.len(), 1);
        assert_eq!(jerseys[0].name, "Daisy");

        let sick = repo.find_by_health(HealthStatus::Sick).await.unwrap();
        assert_eq!(sick.len(), 1);
        assert_eq!(sick[0].name, "Moo");

        assert!(repo.find_by_breed("Wagyu").await.unwrap().is_empty());
    }
}
