use std::sync::Arc;

use logger::TracingLogger;
use persistence::auth::repository::AuthRepositoryPostgres;
use persistence::beverage::repository::BeverageRepositoryPostgres;

use openai::client::OpenAIClient;
use openai::recipe_generator::RecipeGeneratorOpenAI;

use business::application::beverage::create::CreateBeverageUseCaseImpl;
use business::application::beverage::delete::DeleteBeverageUseCaseImpl;
use business::application::beverage::get_all::GetAllBeveragesUseCaseImpl;
use business::application::beverage::get_by_id::GetBeverageByIdUseCaseImpl;
use business::application::beverage::update::UpdateBeverageUseCaseImpl;
use business::application::recommendation::recommend_beverages::RecommendBeveragesUseCaseImpl;
use business::application::recommendation::recommend_recipes::RecommendRecipesUseCaseImpl;
use business::domain::auth::repository::AuthRepository;

use crate::config::openai_config::OpenAIConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub beverage_api: crate::api::beverage::routes::BeverageApi,
    pub recommendation_api: crate::api::recommendation::routes::RecommendationApi,
    pub auth_repository: Arc<dyn AuthRepository>,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let beverage_repository = Arc::new(BeverageRepositoryPostgres::new(pool.clone()));
        let auth_repository: Arc<dyn AuthRepository> =
            Arc::new(AuthRepositoryPostgres::new(pool));

        let openai_config = OpenAIConfig::from_env();
        let openai_client = OpenAIClient::new(openai_config.api_key);
        let recipe_generator = Arc::new(RecipeGeneratorOpenAI::new(openai_client));

        // Beverage use cases
        let create_use_case = Arc::new(CreateBeverageUseCaseImpl {
            repository: beverage_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllBeveragesUseCaseImpl {
            repository: beverage_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetBeverageByIdUseCaseImpl {
            repository: beverage_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateBeverageUseCaseImpl {
            repository: beverage_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteBeverageUseCaseImpl {
            repository: beverage_repository.clone(),
            logger: logger.clone(),
        });

        // Recommendation use cases
        let recommend_recipes_use_case = Arc::new(RecommendRecipesUseCaseImpl {
            repository: beverage_repository,
            generator: recipe_generator,
            logger: logger.clone(),
        });
        let recommend_beverages_use_case = Arc::new(RecommendBeveragesUseCaseImpl { logger });

        let beverage_api = crate::api::beverage::routes::BeverageApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        );

        let recommendation_api = crate::api::recommendation::routes::RecommendationApi::new(
            recommend_recipes_use_case,
            recommend_beverages_use_case,
        );

        Self {
            health_api,
            beverage_api,
            recommendation_api,
            auth_repository,
        }
    }
}
