use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Flag query parameter as it arrives on the wire.
///
/// Query strings always deliver text, but JSON callers and tests may hand over a
/// real boolean, so both shapes are accepted here and coerced later.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[serde(untagged)]
pub enum FlagParam {
    Bool(bool),
    Text(String),
}

/// Raw query parameters accepted by the server listing endpoints.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default, ToSchema)]
pub struct ServerFilterQuery {
    /// `win` or `lin`.
    pub os: Option<String>,
    pub network: Option<FlagParam>,
    pub disk: Option<FlagParam>,
    pub partition: Option<FlagParam>,
    pub repository: Option<FlagParam>,
    /// Connection status to match exactly, e.g. `connect`.
    pub state: Option<String>,
    /// `assign` or `unassign`.
    pub license: Option<String>,
    pub detail: Option<FlagParam>,
}

/// License column rendering: the assigned license number or the word `Unassigned`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[serde(untagged)]
pub enum LicenseDto {
    Assigned(i32),
    Label(String),
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerBasicDto {
    pub system_name: String,
    pub system_mode: String,
    pub os: String,
    pub version: String,
    pub ip: String,
    pub status: String,
    #[serde(rename = "licenseID")]
    pub license_id: LicenseDto,
}

/// Detailed server view. Relation arrays are omitted when the server has no rows
/// for that relation or the relation was not requested.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerDetailDto {
    #[serde(flatten)]
    pub basic: ServerBasicDto,
    pub agent_version: String,
    pub model: String,
    pub manufacturer: String,
    pub cpu: String,
    pub cpu_count: String,
    pub memory: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub disk: Option<Vec<DiskInfoDto>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub network: Option<Vec<NetworkInfoDto>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub partition: Option<Vec<PartitionInfoDto>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub repository: Option<Vec<RepositoryInfoDto>>,
}

/// One element of the server listing; which shape is used depends on the `detail` flag.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[serde(untagged)]
pub enum ServerDto {
    Detail(ServerDetailDto),
    Basic(ServerBasicDto),
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiskInfoDto {
    pub device: String,
    pub disk_type: String,
    pub disk_size: String,
    pub last_updated: String,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfoDto {
    pub name: String,
    pub ip_address: String,
    pub subnet: String,
    pub gateway: String,
    pub mac_address: String,
    pub last_updated: String,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartitionInfoDto {
    pub size: String,
    pub used: String,
    pub free: String,
    pub usage: String,
    pub letter: String,
    pub device: String,
    pub file_system: String,
    pub last_updated: String,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryInfoDto {
    pub repository_type: String,
    pub os: String,
    pub used: String,
    pub free: String,
    pub local_path: String,
    pub remote_path: String,
    pub ip_address: String,
    pub last_updated: String,
}
