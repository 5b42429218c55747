#[derive(Debug, thiserror::Error)]
pub enum BeverageError {
    #[error("beverage.title_empty")]
    TitleEmpty,
    #[error("beverage.category_empty")]
    CategoryEmpty,
    #[error("beverage.barcode_empty")]
    BarcodeEmpty,
    #[error("beverage.not_found")]
    NotFound,
    #[error("beverage.permission_denied")]
    PermissionDenied,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
