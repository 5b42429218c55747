use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recommendation::errors::RecommendationError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RecommendationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            RecommendationError::BeverageNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "recommendation.beverage_not_found",
            ),
            RecommendationError::UpstreamSchemaViolation => (
                StatusCode::BAD_GATEWAY,
                "UpstreamContractViolation",
                "recommendation.upstream_schema_violation",
            ),
            RecommendationError::UpstreamUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "UpstreamUnavailable",
                "recommendation.upstream_unavailable",
            ),
            RecommendationError::NotSupported => (
                StatusCode::NOT_IMPLEMENTED,
                "NotImplemented",
                "recommendation.not_supported",
            ),
            RecommendationError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
