use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};
use uuid::Uuid;

use business::domain::beverage::use_cases::create::{CreateBeverageParams, CreateBeverageUseCase};
use business::domain::beverage::use_cases::delete::{DeleteBeverageParams, DeleteBeverageUseCase};
use business::domain::beverage::use_cases::get_all::{
    GetAllBeveragesParams, GetAllBeveragesUseCase,
};
use business::domain::beverage::use_cases::get_by_id::{
    GetBeverageByIdParams, GetBeverageByIdUseCase,
};
use business::domain::beverage::use_cases::update::{UpdateBeverageParams, UpdateBeverageUseCase};

use crate::api::beverage::dto::{
    BeverageListResponse, BeverageResponse, CreateBeverageRequest, MessageResponse,
    UpdateBeverageRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::ApiKeyAuth;
use crate::api::tags::ApiTags;

const DEFAULT_PAGE_LIMIT: i64 = 100;

pub struct BeverageApi {
    create_use_case: Arc<dyn CreateBeverageUseCase>,
    get_all_use_case: Arc<dyn GetAllBeveragesUseCase>,
    get_by_id_use_case: Arc<dyn GetBeverageByIdUseCase>,
    update_use_case: Arc<dyn UpdateBeverageUseCase>,
    delete_use_case: Arc<dyn DeleteBeverageUseCase>,
}

impl BeverageApi {
    pub fn new(
        create_use_case: Arc<dyn CreateBeverageUseCase>,
        get_all_use_case: Arc<dyn GetAllBeveragesUseCase>,
        get_by_id_use_case: Arc<dyn GetBeverageByIdUseCase>,
        update_use_case: Arc<dyn UpdateBeverageUseCase>,
        delete_use_case: Arc<dyn DeleteBeverageUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Beverage catalog API
///
/// Endpoints for creating, reading, updating, and deleting cataloged
/// beverages. All records are scoped to their owner; superusers see
/// everything.
#[OpenApi]
impl BeverageApi {
    /// Register a new beverage
    #[oai(path = "/beverages", method = "post", tag = "ApiTags::Beverages")]
    async fn create_beverage(
        &self,
        auth: ApiKeyAuth,
        body: Json<CreateBeverageRequest>,
    ) -> CreateBeverageResponse {
        let params = CreateBeverageParams {
            caller: auth.0,
            title: body.0.title,
            description: body.0.description.unwrap_or_default(),
            category: body.0.category,
            tags: body.0.tags.unwrap_or_default(),
            barcode: body.0.barcode,
        };

        match self.create_use_case.execute(params).await {
            Ok(beverage) => CreateBeverageResponse::Created(Json(beverage.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateBeverageResponse::BadRequest(json),
                    _ => CreateBeverageResponse::InternalError(json),
                }
            }
        }
    }

    /// List beverages
    ///
    /// Returns a page of beverages plus the total count. Non-superusers only
    /// see records they own.
    #[oai(path = "/beverages", method = "get", tag = "ApiTags::Beverages")]
    async fn get_all_beverages(
        &self,
        auth: ApiKeyAuth,
        /// Number of rows to skip (default: 0)
        offset: Query<Option<i64>>,
        /// Maximum rows to return (default: 100)
        limit: Query<Option<i64>>,
    ) -> GetAllBeveragesResponse {
        let params = GetAllBeveragesParams {
            caller: auth.0,
            offset: offset.0.unwrap_or(0).max(0),
            limit: limit.0.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(0, DEFAULT_PAGE_LIMIT),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(page) => GetAllBeveragesResponse::Ok(Json(BeverageListResponse {
                data: page.data.into_iter().map(|b| b.into()).collect(),
                count: page.count,
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllBeveragesResponse::InternalError(json)
            }
        }
    }

    /// Get a beverage by ID
    #[oai(path = "/beverages/:id", method = "get", tag = "ApiTags::Beverages")]
    async fn get_beverage_by_id(&self, auth: ApiKeyAuth, id: Path<String>) -> GetBeverageByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetBeverageByIdResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "beverage.invalid_id".to_string(),
                }));
            }
        };

        match self
            .get_by_id_use_case
            .execute(GetBeverageByIdParams {
                caller: auth.0,
                id: uuid,
            })
            .await
        {
            Ok(beverage) => GetBeverageByIdResponse::Ok(Json(beverage.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => GetBeverageByIdResponse::Forbidden(json),
                    404 => GetBeverageByIdResponse::NotFound(json),
                    _ => GetBeverageByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a beverage
    ///
    /// Partial-field update: absent fields keep their current values.
    #[oai(path = "/beverages/:id", method = "put", tag = "ApiTags::Beverages")]
    async fn update_beverage(
        &self,
        auth: ApiKeyAuth,
        id: Path<String>,
        body: Json<UpdateBeverageRequest>,
    ) -> UpdateBeverageResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateBeverageResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "beverage.invalid_id".to_string(),
                }));
            }
        };

        let params = UpdateBeverageParams {
            caller: auth.0,
            id: uuid,
            title: body.0.title,
            description: body.0.description,
            category: body.0.category,
            tags: body.0.tags,
            barcode: body.0.barcode,
        };

        match self.update_use_case.execute(params).await {
            Ok(beverage) => UpdateBeverageResponse::Ok(Json(beverage.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateBeverageResponse::BadRequest(json),
                    403 => UpdateBeverageResponse::Forbidden(json),
                    404 => UpdateBeverageResponse::NotFound(json),
                    _ => UpdateBeverageResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a beverage
    #[oai(path = "/beverages/:id", method = "delete", tag = "ApiTags::Beverages")]
    async fn delete_beverage(&self, auth: ApiKeyAuth, id: Path<String>) -> DeleteBeverageResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return DeleteBeverageResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "beverage.invalid_id".to_string(),
                }));
            }
        };

        match self
            .delete_use_case
            .execute(DeleteBeverageParams {
                caller: auth.0,
                id: uuid,
            })
            .await
        {
            Ok(()) => DeleteBeverageResponse::Ok(Json(MessageResponse {
                message: "Beverage deleted successfully".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteBeverageResponse::Forbidden(json),
                    404 => DeleteBeverageResponse::NotFound(json),
                    _ => DeleteBeverageResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateBeverageResponse {
    #[oai(status = 201)]
    Created(Json<BeverageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllBeveragesResponse {
    #[oai(status = 200)]
    Ok(Json<BeverageListResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetBeverageByIdResponse {
    #[oai(status = 200)]
    Ok(Json<BeverageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateBeverageResponse {
    #[oai(status = 200)]
    Ok(Json<BeverageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteBeverageResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
