#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("recommendation.beverage_not_found")]
    BeverageNotFound,
    #[error("recommendation.upstream_schema_violation")]
    UpstreamSchemaViolation,
    #[error("recommendation.upstream_unavailable")]
    UpstreamUnavailable,
    #[error("recommendation.not_supported")]
    NotSupported,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
