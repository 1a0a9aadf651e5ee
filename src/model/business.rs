use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IndustryType {
    Tech,
    Finance,
    Healthcare,
    Education,
    Manufacturing,
    Retail,
    Other,
}

impl IndustryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tech => "tech",
            Self::Finance => "finance",
            Self::Healthcare => "healthcare",
            Self::Education => "education",
            Self::Manufacturing => "manufacturing",
            Self::Retail => "retail",
            Self::Other => "other",
        }
    }

    /// Parses a stored column value, falling back to `Other` for anything unrecognized.
    pub fn from_column(value: &str) -> Self {
        match value {
            "tech" => Self::Tech,
            "finance" => Self::Finance,
            "healthcare" => Self::Healthcare,
            "education" => Self::Education,
            "manufacturing" => Self::Manufacturing,
            "retail" => Self::Retail,
            _ => Self::Other,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDetailsDto {
    pub industry_type: IndustryType,
    pub employee_count: i32,
    pub founding_year: i32,
    pub address: AddressDto,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgreementsDto {
    #[serde(default)]
    pub data_processing: bool,
    #[serde(default)]
    pub marketing: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusinessDto {
    pub company_name: String,
    pub business_number: String,
    pub email: String,
    pub password: String,
    pub company_details: CompanyDetailsDto,
    #[serde(default)]
    pub agreements: AgreementsDto,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAddressDto {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBusinessDto {
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub industry_type: Option<IndustryType>,
    pub employee_count: Option<i32>,
    pub founding_year: Option<i32>,
    pub address: Option<UpdateAddressDto>,
    pub marketing_consent: Option<bool>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDto {
    pub id: i32,
    pub company_name: String,
    pub business_number: String,
    pub email: String,
    pub industry_type: IndustryType,
    pub employee_count: i32,
    pub founding_year: i32,
    pub status: String,
    pub address: Option<AddressDto>,
    pub marketing_consent: bool,
    pub data_processing_consent: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessNumberDto {
    pub business_number: String,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessNumberValidationDto {
    pub business_number: String,
    pub valid: bool,
}
