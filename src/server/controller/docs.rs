use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        business::{
            AddressDto, AgreementsDto, BusinessDto, BusinessNumberDto,
            BusinessNumberValidationDto, CompanyDetailsDto, CreateBusinessDto, IndustryType,
            UpdateAddressDto, UpdateBusinessDto,
        },
        server::{
            DiskInfoDto, LicenseDto, NetworkInfoDto, PartitionInfoDto, RepositoryInfoDto,
            ServerBasicDto, ServerDetailDto, ServerDto,
        },
        user::{CreateUserDto, LoginDto, UpdateUserDto, UserDto},
    },
    server::controller::{business, server, user},
};

/// OpenAPI document covering every `/api` route.
#[derive(OpenApi)]
#[openapi(
    info(title = "Inventory API", description = "Server inventory and account management"),
    paths(
        server::get_servers,
        server::get_server_by_name,
        user::get_users,
        user::get_user_by_id,
        user::get_user_by_email,
        user::create_user,
        user::update_user,
        user::delete_user,
        user::login,
        business::register_business,
        business::validate_business_number,
        business::get_businesses,
        business::get_business,
        business::update_business,
        business::deactivate_business,
    ),
    components(schemas(
        ErrorDto,
        ServerDto,
        ServerBasicDto,
        ServerDetailDto,
        LicenseDto,
        DiskInfoDto,
        NetworkInfoDto,
        PartitionInfoDto,
        RepositoryInfoDto,
        UserDto,
        CreateUserDto,
        UpdateUserDto,
        LoginDto,
        BusinessDto,
        CreateBusinessDto,
        UpdateBusinessDto,
        CompanyDetailsDto,
        AgreementsDto,
        AddressDto,
        UpdateAddressDto,
        IndustryType,
        BusinessNumberDto,
        BusinessNumberValidationDto,
    )),
    tags(
        (name = "server", description = "Server inventory queries"),
        (name = "user", description = "User accounts"),
        (name = "business", description = "Business accounts")
    )
)]
pub struct ApiDoc;

/// GET /api/openapi.json - Serve the generated OpenAPI document
pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
