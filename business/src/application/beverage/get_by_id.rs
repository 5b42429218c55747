use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::beverage::errors::BeverageError;
use crate::domain::beverage::model::Beverage;
use crate::domain::beverage::repository::BeverageRepository;
use crate::domain::beverage::use_cases::get_by_id::{
    GetBeverageByIdParams, GetBeverageByIdUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetBeverageByIdUseCaseImpl {
    pub repository: Arc<dyn BeverageRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetBeverageByIdUseCase for GetBeverageByIdUseCaseImpl {
    async fn execute(&self, params: GetBeverageByIdParams) -> Result<Beverage, BeverageError> {
        self.logger
            .info(&format!("Fetching beverage by id: {}", params.id));

        let beverage = self
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
            "Ginger Beer".to_string(),
            "a spicy mixer".to_string(),
            "Mixer".to_string(),
            vec!["spicy".to_string()],
            "5000112637922".to_string(),
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_return_beverage_to_its_owner() {
        let beverage_id = Uuid::new_v4();
        let mut mock_repo = MockBeverageRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(move |id| *id == beverage_id)
            .returning(move |id| Ok(stored_beverage(id, "alice")));

        let use_case = GetBeverageByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetBeverageByIdParams {
                caller: Caller::user("alice"),
                id: beverage_id,
            })
            .await;

        assert_eq!(result.unwrap().title, "Ginger Beer");
    }

    #[tokio::test]
    async fn should_reject_non_owner_access() {
        let mut mock_repo = MockBeverageRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_beverage(id, "alice")));

        let use_case = GetBeverageByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetBeverageByIdParams {
                caller: Caller::user("mallory"),
                id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            BeverageError::PermissionDenied
        ));
    }

    #[tokio::test]
    async fn should_allow_superuser_access_to_any_beverage() {
        let mut mock_repo = MockBeverageRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_beverage(id, "alice")));

        let use_case = GetBeverageByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetBeverageByIdParams {
                caller: Caller::superuser("admin"),
                id: Uuid::new_v4(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_beverage_missing() {
        let mut mock_repo = MockBeverageRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetBeverageByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetBeverageByIdParams {
                caller: Caller::user("alice"),
                id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), BeverageError::NotFound));
    }
}
