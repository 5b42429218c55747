use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::beverage::errors::BeverageError;
use crate::domain::beverage::model::Beverage;
use crate::domain::shared::value_objects::Caller;

pub struct GetBeverageByIdParams {
    pub caller: Caller,
    pub id: Uuid,
}

#[async_trait]
pub trait GetBeverageByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetBeverageByIdParams) -> Result<Beverage, BeverageError>;
}
