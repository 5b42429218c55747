use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::recommendation::model::{Recipe, Recommendation};

#[derive(Debug, Clone, Object)]
pub struct RecommendRecipesRequest {
    /// Barcode of a cataloged beverage
    pub barcode: String,
}

#[derive(Debug, Clone, Object)]
pub struct RecommendBeveragesRequest {
    /// Recipe name or free-form description to match beverages against
    pub recipe: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RecipeResponse {
    /// Name of the cocktail or dish
    pub title: String,
    /// Ingredients in listing order
    pub ingredients: Vec<String>,
    /// Preparation steps in order
    pub steps: Vec<String>,
}

impl From<Recipe> for RecipeResponse {
    fn from(r: Recipe) -> Self {
        Self {
            title: r.title,
            ingredients: r.ingredients,
            steps: r.steps,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct DebugInfoResponse {
    /// The natural-language beverage description sent to the generator
    pub beverage: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub debug_info: DebugInfoResponse,
    /// At most 2 cocktail recipes
    pub cocktails: Vec<RecipeResponse>,
    /// At most 2 side-dish recipes
    pub side_dishes: Vec<RecipeResponse>,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(r: Recommendation) -> Self {
        Self {
            debug_info: DebugInfoResponse {
                beverage: r.beverage_description,
            },
            cocktails: r.cocktails.into_iter().map(|c| c.into()).collect(),
            side_dishes: r.side_dishes.into_iter().map(|d| d.into()).collect(),
        }
    }
}
