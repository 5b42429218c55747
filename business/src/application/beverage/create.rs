use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::beverage::errors::BeverageError;
use crate::domain::beverage::model::{Beverage, NewBeverageProps};
use crate::domain::beverage::repository::BeverageRepository;
use crate::domain::beverage::use_cases::create::{CreateBeverageParams, CreateBeverageUseCase};
use crate::domain::logger::Logger;

pub struct CreateBeverageUseCaseImpl {
    pub repository: Arc<dyn BeverageRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateBeverageUseCase for CreateBeverageUseCaseImpl {
    async fn execute(&self, params: CreateBeverageParams) -> Result<Beverage, BeverageError> {
        self.logger
            .info(&format!("Creating beverage: {}", params.title));

        let beverage = Beverage::new(NewBeverageProps {
            owner_id: params.caller.user_id,
            title: params.title,
            description: params.description,
            category: params.category,
            tags: params.tags,
            barcode: params.barcode,
        })?;

        self.repository.save(&beverage).await?;

        self.logger
            .info(&format!("Beverage created with id: {}", beverage.id));
        Ok(beverage)
    }
}
