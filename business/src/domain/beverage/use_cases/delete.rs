use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::beverage::errors::BeverageError;
use crate::domain::shared::value_objects::Caller;

pub struct DeleteBeverageParams {
    pub caller: Caller,
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteBeverageUseCase: Send + Sync {
    async fn execute(&self, params: DeleteBeverageParams) -> Result<(), BeverageError>;
}
