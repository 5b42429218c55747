use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::beverage::errors::BeverageError;
use crate::domain::beverage::repository::BeverageRepository;
use crate::domain::beverage::use_cases::delete::{DeleteBeverageParams, DeleteBeverageUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct DeleteBeverageUseCaseImpl {
    pub repository: Arc<dyn BeverageRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteBeverageUseCase for DeleteBeverageUseCaseImpl {
    async fn execute(&self, params: DeleteBeverageParams) -> Result<(), BeverageError> {
        self.logger
            .info(&format!("Deleting beverage: {}", params.id));

        let beverage = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => BeverageError::NotFound,
                other => BeverageError::Repository(other),
            })?;

        if !params.caller.can_access(&beverage.owner_id) {
            return Err(BeverageError::PermissionDenied);
        }

        self.repository.delete(params.id).await?;

        Ok(())
    }
}
