use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::Caller;

use super::model::Beverage;

#[async_trait]
pub trait BeverageRepository: Send + Sync {
    /// Returns a page of beverages plus the total count, scoped to the
    /// caller's own records unless the caller is a superuser.
    async fn get_all(
        &self,
        caller: &Caller,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Beverage>, i64), RepositoryError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Beverage, RepositoryError>;

    /// Finds the beverage with an exact barcode match, scoped like `get_all`.
    /// Barcodes are not unique across records; ties resolve to the most
    /// recently created row.
    async fn find_by_barcode(
        &self,
        caller: &Caller,
        barcode: &str,
    ) -> Result<Beverage, RepositoryError>;

    async fn save(&self, beverage: &Beverage) -> Result<(), RepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
