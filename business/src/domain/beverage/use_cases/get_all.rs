use async_trait::async_trait;

use crate::domain::beverage::errors::BeverageError;
use crate::domain::beverage::model::Beverage;
use crate::domain::shared::value_objects::Caller;

pub struct GetAllBeveragesParams {
    pub caller: Caller,
    pub offset: i64,
    pub limit: i64,
}

/// A page of beverages plus the total number of rows in scope.
#[derive(Debug)]
pub struct BeveragePage {
    pub data: Vec<Beverage>,
    pub count: i64,
}

#[async_trait]
pub trait GetAllBeveragesUseCase: Send + Sync {
    async fn execute(&self, params: GetAllBeveragesParams) -> Result<BeveragePage, BeverageError>;
}
