use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::beverage::errors::BeverageError;
use crate::domain::beverage::model::Beverage;
use crate::domain::shared::value_objects::Caller;

/// Partial-field update: `None` keeps the stored value.
pub struct UpdateBeverageParams {
    pub caller: Caller,
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub barcode: Option<String>,
}

#[async_trait]
pub trait UpdateBeverageUseCase: Send + Sync {
    async fn execute(&self, params: UpdateBeverageParams) -> Result<Beverage, BeverageError>;
}
