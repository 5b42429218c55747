use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::beverage::errors::BeverageError;
use crate::domain::beverage::repository::BeverageRepository;
use crate::domain::beverage::use_cases::get_all::{
    BeveragePage, GetAllBeveragesParams, GetAllBeveragesUseCase,
};
use crate::domain::logger::Logger;

pub struct GetAllBeveragesUseCaseImpl {
    pub repository: Arc<dyn BeverageRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllBeveragesUseCase for GetAllBeveragesUseCaseImpl {
    async fn execute(&self, params: GetAllBeveragesParams) -> Result<BeveragePage, BeverageError> {
        self.logger.info(&format!(
            "Listing beverages for {} (offset {}, limit {})",
            params.caller.user_id, params.offset, params.limit
        ));

        let (data, count) = self
            .repository
            .get_all(&params.caller, params.offset, params.limit)
            .await?;

        Ok(BeveragePage { data, count })
    }
}
