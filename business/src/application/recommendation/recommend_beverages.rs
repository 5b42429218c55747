use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::beverage::model::Beverage;
use crate::domain::logger::Logger;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::use_cases::recommend_beverages::{
    RecommendBeveragesParams, RecommendBeveragesUseCase,
};

/// Placeholder for the reverse lookup. There is no matching algorithm yet,
/// so every call answers `NotSupported`.
pub struct RecommendBeveragesUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RecommendBeveragesUseCase for RecommendBeveragesUseCaseImpl {
    async fn execute(
        &self,
        params: RecommendBeveragesParams,
    ) -> Result<Vec<Beverage>, RecommendationError> {
        self.logger.warn(&format!(
            "Beverage-by-recipe lookup requested but not supported: {}",
            params.recipe
        ));

        Err(RecommendationError::NotSupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::Caller;
    use mockall::mock;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    #[tokio::test]
    async fn should_answer_not_supported() {
        let mut logger = MockLog::new();
        logger.expect_warn().returning(|_| ());

        let use_case = RecommendBeveragesUseCaseImpl {
            logger: Arc::new(logger),
        };

        let result = use_case
            .execute(RecommendBeveragesParams {
                caller: Caller::user("alice"),
                recipe: "Gin & Tonic".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            RecommendationError::NotSupported
        ));
    }
}
