use async_trait::async_trait;

use crate::domain::beverage::errors::BeverageError;
use crate::domain::beverage::model::Beverage;
use crate::domain::shared::value_objects::Caller;

pub struct CreateBeverageParams {
    pub caller: Caller,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub barcode: String,
}

#[async_trait]
pub trait CreateBeverageUseCase: Send + Sync {
    async fn execute(&self, params: CreateBeverageParams) -> Result<Beverage, BeverageError>;
}
