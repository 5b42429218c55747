use async_trait::async_trait;

use crate::domain::beverage::model::Beverage;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::shared::value_objects::Caller;

pub struct RecommendBeveragesParams {
    pub caller: Caller,
    pub recipe: String,
}

/// Reverse lookup: beverages matching a recipe. The matching algorithm does
/// not exist yet; implementations answer `NotSupported`.
#[async_trait]
pub trait RecommendBeveragesUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RecommendBeveragesParams,
    ) -> Result<Vec<Beverage>, RecommendationError>;
}
