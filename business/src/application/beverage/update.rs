use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::beverage::errors::BeverageError;
use crate::domain::beverage::model::Beverage;
use crate::domain::beverage::repository::BeverageRepository;
use crate::domain::beverage::use_cases::update::{UpdateBeverageParams, UpdateBeverageUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateBeverageUseCaseImpl {
    pub repository: Arc<dyn BeverageRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateBeverageUseCase for UpdateBeverageUseCaseImpl {
    async fn execute(&self, params: UpdateBeverageParams) -> Result<Beverage, BeverageError> {
        self.logger
            .info(&format!("Updating beverage: {}", params.id));

        let mut beverage = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => BeverageError::NotFound,
                other => BeverageError::Repository(other),
            })?;

        if !params.caller.can_access(&beverage.owner_id) {
            return Err(BeverageError::PermissionDenied);
        }

        beverage.apply_update(
            params.title,
            params.description,
            params.category,
            params.tags,
            params.barcode,
        )?;

        self.repository.save(&beverage).await?;

        Ok(beverage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::{Caller, UserId};
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub BeverageRepo {}

        #[async_trait]
        impl BeverageRepository for BeverageRepo {
            async fn get_all(&self, caller: &Caller, offset: i64, limit: i64) -> Result<(Vec<Beverage>, i64), RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Beverage, RepositoryError>;
            async fn find_by_barcode(&self, caller: &Caller, barcode: &str) -> Result<Beverage, RepositoryError>;
            async fn save(&self, beverage: &Beverage) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn stored_beverage(id: Uuid, owner: &str) -> Beverage {
        let now = Utc::now();
        Beverage::from_repository(
            id,
            UserId::new(owner),
            "Cola".to_string(),
            "a sweet soda".to_string(),
            "Soda".to_string(),
            vec!["sweet".to_string()],
            "5449000000996".to_string(),
            now,
            now,
        )
    }

    fn params(id: Uuid, caller: Caller) -> UpdateBeverageParams {
        UpdateBeverageParams {
            caller,
            id,
            title: None,
            description: Some("a sweet caramel soda".to_string()),
            category: None,
            tags: None,
            barcode: None,
        }
    }

    #[tokio::test]
    async fn should_apply_partial_update_and_save() {
        let beverage_id = Uuid::new_v4();
        let mut mock_repo = MockBeverageRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_beverage(id, "alice")));
        mock_repo
            .expect_save()
            .withf(|b| b.title == "Cola" && b.description == "a sweet caramel soda")
            .returning(|_| Ok(()));

        let use_case = UpdateBeverageUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(beverage_id, Caller::user("alice")))
            .await;

        let updated = result.unwrap();
        assert_eq!(updated.description, "a sweet caramel soda");
        assert_eq!(updated.category, "Soda");
    }

    #[tokio::test]
    async fn should_reject_update_from_non_owner() {
        let mut mock_repo = MockBeverageRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_beverage(id, "alice")));

        let use_case = UpdateBeverageUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(Uuid::new_v4(), Caller::user("mallory")))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            BeverageError::PermissionDenied
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_beverage() {
        let mut mock_repo = MockBeverageRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateBeverageUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(Uuid::new_v4(), Caller::user("alice")))
            .await;

        assert!(matches!(result.unwrap_err(), BeverageError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_update_that_empties_barcode() {
        let mut mock_repo = MockBeverageRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_beverage(id, "alice")));

        let use_case = UpdateBeverageUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut invalid = params(Uuid::new_v4(), Caller::user("alice"));
        invalid.barcode = Some("  ".to_string());
        let result = use_case.execute(invalid).await;

        assert!(matches!(result.unwrap_err(), BeverageError::BarcodeEmpty));
    }
}
