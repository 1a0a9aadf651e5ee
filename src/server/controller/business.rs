use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        business::{
            BusinessDto, BusinessNumberDto, BusinessNumberValidationDto, CreateBusinessDto,
            UpdateBusinessDto,
        },
    },
    server::{
        error::AppError, middleware::validation::ValidatedJson,
        service::business::BusinessService, state::AppState,
    },
};

/// Tag for grouping business account endpoints in OpenAPI documentation
pub static BUSINESS_TAG: &str = "business";

/// POST /api/businesses - Register a business account
///
/// The account and its address are stored in one transaction.
///
/// # Returns
/// - `201 Created`: The registered business
/// - `400 Bad Request`: Invalid payload or business number checksum
/// - `409 Conflict`: Email or business number already registered
#[utoipa::path(
    post,
    path = "/api/businesses",
    tag = BUSINESS_TAG,
    request_body = CreateBusinessDto,
    responses(
        (status = 201, description = "Successfully registered business", body = ApiResponse<BusinessDto>),
        (status = 400, description = "Invalid business data", body = ErrorDto),
        (status = 409, description = "Email or business number already registered", body = ErrorDto),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn register_business(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBusinessDto>,
) -> Result<impl IntoResponse, AppError> {
    let business = BusinessService::new(&state.db).register(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            business.into_dto(),
            "Business registered",
        )),
    ))
}

/// POST /api/businesses/validate-number - Check a business number
///
/// A well-formed number is checked for its checksum and for prior registration;
/// the answer is always 200 with `valid` set accordingly.
#[utoipa::path(
    post,
    path = "/api/businesses/validate-number",
    tag = BUSINESS_TAG,
    request_body = BusinessNumberDto,
    responses(
        (status = 200, description = "Validation result", body = ApiResponse<BusinessNumberValidationDto>),
        (status = 400, description = "Malformed business number", body = ErrorDto),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn validate_business_number(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BusinessNumberDto>,
) -> Result<impl IntoResponse, AppError> {
    let valid = BusinessService::new(&state.db)
        .validate_business_number(&payload.business_number)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(BusinessNumberValidationDto {
            business_number: payload.business_number,
            valid,
        })),
    ))
}

/// GET /api/businesses - List business accounts
#[utoipa::path(
    get,
    path = "/api/businesses",
    tag = BUSINESS_TAG,
    responses(
        (status = 200, description = "Successfully retrieved businesses", body = ApiResponse<Vec<BusinessDto>>),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn get_businesses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let businesses = BusinessService::new(&state.db).get_all().await?;

    let businesses_dto: Vec<BusinessDto> = businesses.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::success(businesses_dto))))
}

/// GET /api/businesses/{id} - Get a business account
#[utoipa::path(
    get,
    path = "/api/businesses/{id}",
    tag = BUSINESS_TAG,
    params(("id" = i32, Path, description = "Business id")),
    responses(
        (status = 200, description = "Successfully retrieved business", body = ApiResponse<BusinessDto>),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn get_business(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let business = BusinessService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(business.into_dto()))))
}

/// PUT /api/businesses/{id} - Update a business account
#[utoipa::path(
    put,
    path = "/api/businesses/{id}",
    tag = BUSINESS_TAG,
    params(("id" = i32, Path, description = "Business id")),
    request_body = UpdateBusinessDto,
    responses(
        (status = 200, description = "Successfully updated business", body = ApiResponse<BusinessDto>),
        (status = 400, description = "Invalid business data", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn update_business(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateBusinessDto>,
) -> Result<impl IntoResponse, AppError> {
    let business = BusinessService::new(&state.db).update(id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message(business.into_dto(), "Business updated")),
    ))
}

/// DELETE /api/businesses/{id} - Deactivate a business account
///
/// The account is kept with status `INACTIVE`.
#[utoipa::path(
    delete,
    path = "/api/businesses/{id}",
    tag = BUSINESS_TAG,
    params(("id" = i32, Path, description = "Business id")),
    responses(
        (status = 200, description = "Successfully deactivated business", body = ApiResponse<BusinessDto>),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn deactivate_business(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let business = BusinessService::new(&state.db).deactivate(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message(
            business.into_dto(),
            "Business deactivated",
        )),
    ))
}
