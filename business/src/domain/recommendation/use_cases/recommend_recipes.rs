use async_trait::async_trait;

use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::Recommendation;
use crate::domain::shared::value_objects::Caller;

pub struct RecommendRecipesParams {
    pub caller: Caller,
    pub barcode: String,
}

#[async_trait]
pub trait RecommendRecipesUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RecommendRecipesParams,
    ) -> Result<Recommendation, RecommendationError>;
}
