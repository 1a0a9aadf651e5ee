use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        server::{ServerDto, ServerFilterQuery},
    },
    server::{
        error::AppError, middleware::validation::ValidatedQuery,
        model::server::ServerFilterOptions, service::server::ServerService, state::AppState,
    },
};

/// Tag for grouping server inventory endpoints in OpenAPI documentation
pub static SERVER_TAG: &str = "server";

/// GET /api/servers - List inventoried servers
///
/// Applies the OS, state and license filters, attaches the requested relation
/// arrays and renders either the basic or the detailed view. No match is an empty
/// list, not an error.
///
/// # Returns
/// - `200 OK`: Envelope with an array of servers
/// - `400 Bad Request`: Unknown filter value or non-boolean flag
/// - `500 Internal Server Error`: Base or relation query failed
#[utoipa::path(
    get,
    path = "/api/servers",
    tag = SERVER_TAG,
    params(
        ("os" = Option<String>, Query, description = "win or lin"),
        ("state" = Option<String>, Query, description = "connect or disconnect"),
        ("license" = Option<String>, Query, description = "assign or unassign"),
        ("network" = Option<bool>, Query, description = "Attach network interfaces"),
        ("disk" = Option<bool>, Query, description = "Attach disks"),
        ("partition" = Option<bool>, Query, description = "Attach partitions"),
        ("repository" = Option<bool>, Query, description = "Attach backup repositories"),
        ("detail" = Option<bool>, Query, description = "Render the detailed view")
    ),
    responses(
        (status = 200, description = "Successfully retrieved servers", body = ApiResponse<Vec<ServerDto>>),
        (status = 400, description = "Invalid filter parameters", body = ErrorDto),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn get_servers(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ServerFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let options = ServerFilterOptions::from_query(query);

    let service = ServerService::new(&state.db);
    let servers = service.get_servers(&options).await?;

    let servers_dto: Vec<ServerDto> = servers
        .into_iter()
        .map(|s| s.into_dto(options.detail))
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::success(servers_dto))))
}

/// GET /api/servers/name/{name} - Look up a server by system name
///
/// Accepts the same query parameters as the listing.
///
/// # Returns
/// - `200 OK`: Envelope with a one-element array
/// - `400 Bad Request`: Unknown filter value or non-boolean flag
/// - `404 Not Found`: No server with that name matches the filter
/// - `500 Internal Server Error`: Base or relation query failed
#[utoipa::path(
    get,
    path = "/api/servers/name/{name}",
    tag = SERVER_TAG,
    params(
        ("name" = String, Path, description = "System name"),
        ("os" = Option<String>, Query, description = "win or lin"),
        ("state" = Option<String>, Query, description = "connect or disconnect"),
        ("license" = Option<String>, Query, description = "assign or unassign"),
        ("network" = Option<bool>, Query, description = "Attach network interfaces"),
        ("disk" = Option<bool>, Query, description = "Attach disks"),
        ("partition" = Option<bool>, Query, description = "Attach partitions"),
        ("repository" = Option<bool>, Query, description = "Attach backup repositories"),
        ("detail" = Option<bool>, Query, description = "Render the detailed view")
    ),
    responses(
        (status = 200, description = "Successfully retrieved server", body = ApiResponse<Vec<ServerDto>>),
        (status = 400, description = "Invalid filter parameters", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn get_server_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ValidatedQuery(query): ValidatedQuery<ServerFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let options = ServerFilterOptions::from_query(query);

    let service = ServerService::new(&state.db);
    let servers = service.get_server_by_name(&name, &options).await?;

    let servers_dto: Vec<ServerDto> = servers
        .into_iter()
        .map(|s| s.into_dto(options.detail))
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::success(servers_dto))))
}
