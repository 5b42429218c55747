use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::recommendation::use_cases::recommend_beverages::{
    RecommendBeveragesParams, RecommendBeveragesUseCase,
};
use business::domain::recommendation::use_cases::recommend_recipes::{
    RecommendRecipesParams, RecommendRecipesUseCase,
};

use crate::api::beverage::dto::BeverageListResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recommendation::dto::{
    RecommendBeveragesRequest, RecommendRecipesRequest, RecommendationResponse,
};
use crate::api::security::ApiKeyAuth;
use crate::api::tags::ApiTags;

pub struct RecommendationApi {
    recommend_recipes_use_case: Arc<dyn RecommendRecipesUseCase>,
    recommend_beverages_use_case: Arc<dyn RecommendBeveragesUseCase>,
}

impl RecommendationApi {
    pub fn new(
        recommend_recipes_use_case: Arc<dyn RecommendRecipesUseCase>,
        recommend_beverages_use_case: Arc<dyn RecommendBeveragesUseCase>,
    ) -> Self {
        Self {
            recommend_recipes_use_case,
            recommend_beverages_use_case,
        }
    }
}

/// Recommendation API
///
/// Generates cocktail and side-dish recipes for a scanned beverage. Output
/// is sampled from the model, so the same barcode may yield different
/// recipes across calls.
#[OpenApi]
impl RecommendationApi {
    /// Recommend recipes for a beverage
    ///
    /// Looks up the beverage by barcode (most recently created match wins)
    /// and returns up to 2 cocktail and 2 side-dish recipes.
    #[oai(
        path = "/recommendations/recipes",
        method = "post",
        tag = "ApiTags::Recommendations"
    )]
    async fn recommend_recipes(
        &self,
        auth: ApiKeyAuth,
        body: Json<RecommendRecipesRequest>,
    ) -> RecommendRecipesResponse {
        let params = RecommendRecipesParams {
            caller: auth.0,
            barcode: body.0.barcode,
        };

        match self.recommend_recipes_use_case.execute(params).await {
            Ok(recommendation) => RecommendRecipesResponse::Ok(Json(recommendation.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RecommendRecipesResponse::NotFound(json),
                    502 => RecommendRecipesResponse::BadGateway(json),
                    503 => RecommendRecipesResponse::ServiceUnavailable(json),
                    _ => RecommendRecipesResponse::InternalError(json),
                }
            }
        }
    }

    /// Recommend beverages for a recipe
    ///
    /// Reverse lookup; no matching algorithm exists yet, so this always
    /// answers 501.
    #[oai(
        path = "/recommendations/beverages",
        method = "post",
        tag = "ApiTags::Recommendations"
    )]
    async fn recommend_beverages(
        &self,
        auth: ApiKeyAuth,
        body: Json<RecommendBeveragesRequest>,
    ) -> RecommendBeveragesResponse {
        let params = RecommendBeveragesParams {
            caller: auth.0,
            recipe: body.0.recipe,
        };

        match self.recommend_beverages_use_case.execute(params).await {
            Ok(beverages) => RecommendBeveragesResponse::Ok(Json(BeverageListResponse {
                count: beverages.len() as i64,
                data: beverages.into_iter().map(|b| b.into()).collect(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    501 => RecommendBeveragesResponse::NotImplemented(json),
                    _ => RecommendBeveragesResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RecommendRecipesResponse {
    #[oai(status = 200)]
    Ok(Json<RecommendationResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RecommendBeveragesResponse {
    #[oai(status = 200)]
    Ok(Json<BeverageListResponse>),
    #[oai(status = 501)]
    NotImplemented(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
