use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        user::{CreateUserDto, EmailQuery, LoginDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::validation::{ValidatedJson, ValidatedQuery},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// GET /api/users - List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = ApiResponse<Vec<UserDto>>),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    let users_dto: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::success(users_dto))))
}

/// GET /api/users/id/{id} - Get a user by id
#[utoipa::path(
    get,
    path = "/api/users/id/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Successfully retrieved user", body = ApiResponse<UserDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(user.into_dto()))))
}

/// GET /api/users/email?email= - Get a user by email
#[utoipa::path(
    get,
    path = "/api/users/email",
    tag = USER_TAG,
    params(("email" = String, Query, description = "Email address")),
    responses(
        (status = 200, description = "Successfully retrieved user", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid email", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<EmailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_by_email(&query.email).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(user.into_dto()))))
}

/// POST /api/users - Create a user
///
/// # Returns
/// - `201 Created`: The created user
/// - `400 Bad Request`: Invalid payload
/// - `409 Conflict`: Email already in use
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(user.into_dto(), "User created")),
    ))
}

/// PUT /api/users/{id} - Update a user
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).update(id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message(user.into_dto(), "User updated")),
    ))
}

/// DELETE /api/users/{id} - Delete a user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Successfully deleted user", body = ApiResponse<i32>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message(id, "User deleted")),
    ))
}

/// POST /api/users/login - Check a user's credentials
///
/// # Returns
/// - `200 OK`: The authenticated user
/// - `401 Unauthorized`: Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = USER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials accepted", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid login payload", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).login(payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message(user.into_dto(), "Login successful")),
    ))
}
