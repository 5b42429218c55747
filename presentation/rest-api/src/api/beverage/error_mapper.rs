use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::beverage::errors::BeverageError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for BeverageError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            BeverageError::TitleEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "beverage.title_empty",
            ),
            BeverageError::CategoryEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "beverage.category_empty",
            ),
            BeverageError::BarcodeEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "beverage.barcode_empty",
            ),
            BeverageError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "beverage.not_found"),
            BeverageError::PermissionDenied => (
                StatusCode::FORBIDDEN,
                "PermissionError",
                "beverage.permission_denied",
            ),
            BeverageError::Repository(_) => (
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
