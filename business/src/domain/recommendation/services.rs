use async_trait::async_trait;

use crate::domain::beverage::model::Beverage;

use super::errors::RecommendationError;
use super::model::RecipeBundle;

/// Service port for generating cocktail and side-dish recipes for a beverage.
///
/// One outbound call per invocation, no retry, at-most-once. The output is
/// sampled and is not byte-stable across calls for the same beverage.
#[async_trait]
pub trait RecipeGeneratorService: Send + Sync {
    async fn generate(&self, beverage: &Beverage) -> Result<RecipeBundle, RecommendationError>;
}
