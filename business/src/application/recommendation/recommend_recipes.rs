use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::beverage::repository::BeverageRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::{Recommendation, describe_beverage};
use crate::domain::recommendation::services::RecipeGeneratorService;
use crate::domain::recommendation::use_cases::recommend_recipes::{
    RecommendRecipesParams, RecommendRecipesUseCase,
};

pub struct RecommendRecipesUseCaseImpl {
    pub repository: Arc<dyn BeverageRepository>,
    pub generator: Arc<dyn RecipeGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RecommendRecipesUseCase for RecommendRecipesUseCaseImpl {
    async fn execute(
        &self,
        params: RecommendRecipesParams,
    ) -> Result<Recommendation, RecommendationError> {
        self.logger.info(&format!(
            "Recommending recipes for barcode: {}",
            params.barcode
        ));

        let beverage = self
            .repository
            .find_by_barcode(&params.caller, &params.barcode)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => RecommendationError::BeverageNotFound,
                other => RecommendationError::Repository(other),
            })?;

        let description = describe_beverage(&beverage);
        let bundle = self.generator.generate(&beverage).await?;

        self.logger.info(&format!(
            "Generated {} cocktails and {} side dishes for {}",
            bundle.cocktails().len(),
            bundle.side_dishes().len(),
            beverage.title
        ));

        Ok(Recommendation::new(description, bundle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::beverage::model::Beverage;
    use crate::domain::recommendation::model::{Recipe, RecipeBundle};
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
        pub RecipeGenerator {}

        #[async_trait]
        impl RecipeGeneratorService for RecipeGenerator {
            async fn generate(&self, beverage: &Beverage) -> Result<RecipeBundle, RecommendationError>;
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

    fn tonic_water() -> Beverage {
        let now = Utc::now();
        Beverage::from_repository(
            Uuid::new_v4(),
            UserId::new("alice"),
            "Tonic Water".to_string(),
            "a bitter carbonated mixer".to_string(),
            "Mixer".to_string(),
            vec!["bitter".to_string(), "carbonated".to_string()],
            "5901234123457".to_string(),
            now,
            now,
        )
    }

    fn gin_tonic() -> Recipe {
        Recipe {
            title: "Gin & Tonic".to_string(),
            ingredients: vec![
                "50 ml gin".to_string(),
                "150 ml tonic water".to_string(),
                "lime wedge".to_string(),
            ],
            steps: vec![
                "Fill a glass with ice".to_string(),
                "Pour in the gin".to_string(),
                "Top with tonic water and garnish".to_string(),
            ],
        }
    }

    fn params() -> RecommendRecipesParams {
        RecommendRecipesParams {
            caller: Caller::user("alice"),
            barcode: "5901234123457".to_string(),
        }
    }

    #[tokio::test]
    async fn should_return_recommendation_with_description_and_recipes() {
        let mut mock_repo = MockBeverageRepo::new();
        mock_repo
            .expect_find_by_barcode()
            .withf(|_, barcode| barcode == "5901234123457")
            .returning(|_, _| Ok(tonic_water()));

        let mut mock_generator = MockRecipeGenerator::new();
        mock_generator
            .expect_generate()
            .returning(|_| Ok(RecipeBundle::new(vec![gin_tonic()], vec![])));

        let use_case = RecommendRecipesUseCaseImpl {
            repository: Arc::new(mock_repo),
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let recommendation = use_case.execute(params()).await.unwrap();

        assert_eq!(
            recommendation.beverage_description,
            "It's name is Tonic Water, described as a bitter carbonated mixer, \
             it belongs to the category Mixer and has the following properties: \
             bitter, carbonated."
        );
        assert_eq!(recommendation.cocktails.len(), 1);
        assert!(recommendation.side_dishes.is_empty());
        // Upstream ordering must survive untouched.
        assert_eq!(
            recommendation.cocktails[0].steps,
            vec![
                "Fill a glass with ice",
                "Pour in the gin",
                "Top with tonic water and garnish"
            ]
        );
    }

    #[tokio::test]
    async fn should_return_not_found_when_no_beverage_matches_barcode() {
        let mut mock_repo = MockBeverageRepo::new();
        mock_repo
            .expect_find_by_barcode()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let mock_generator = MockRecipeGenerator::new();

        let use_case = RecommendRecipesUseCaseImpl {
            repository: Arc::new(mock_repo),
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(
            result.unwrap_err(),
            RecommendationError::BeverageNotFound
        ));
    }

    #[tokio::test]
    async fn should_surface_upstream_schema_violation() {
        let mut mock_repo = MockBeverageRepo::new();
        mock_repo
            .expect_find_by_barcode()
            .returning(|_, _| Ok(tonic_water()));

        let mut mock_generator = MockRecipeGenerator::new();
        mock_generator
            .expect_generate()
            .returning(|_| Err(RecommendationError::UpstreamSchemaViolation));

        let use_case = RecommendRecipesUseCaseImpl {
            repository: Arc::new(mock_repo),
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(
            result.unwrap_err(),
            RecommendationError::UpstreamSchemaViolation
        ));
    }

    #[tokio::test]
    async fn should_surface_upstream_unavailable() {
        let mut mock_repo = MockBeverageRepo::new();
        mock_repo
            .expect_find_by_barcode()
            .returning(|_, _| Ok(tonic_water()));

        let mut mock_generator = MockRecipeGenerator::new();
        mock_generator
            .expect_generate()
            .returning(|_| Err(RecommendationError::UpstreamUnavailable));

        let use_case = RecommendRecipesUseCaseImpl {
            repository: Arc::new(mock_repo),
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(
            result.unwrap_err(),
            RecommendationError::UpstreamUnavailable
        ));
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockBeverageRepo::new();
        mock_repo
            .expect_find_by_barcode()
            .returning(|_, _| Err(RepositoryError::DatabaseError));

        let mock_generator = MockRecipeGenerator::new();

        let use_case = RecommendRecipesUseCaseImpl {
            repository: Arc::new(mock_repo),
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(
            result.unwrap_err(),
            RecommendationError::Repository(_)
        ));
    }
}
