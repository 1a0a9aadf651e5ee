//! Business account domain models and parameters.

use chrono::{DateTime, Datelike, Utc};

use crate::{
    model::business::{
        AddressDto, BusinessDto, BusinessNumberDto, CreateBusinessDto, IndustryType,
        UpdateBusinessDto,
    },
    server::{
        middleware::validation::{
            validate_email, validate_length, validate_password, validate_zip_code, Validate,
        },
        util::business_number,
    },
};

pub const STATUS_ACTIVE: &str = "ACTIVE";
pub const STATUS_INACTIVE: &str = "INACTIVE";

const MIN_FOUNDING_YEAR: i32 = 1800;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl BusinessAddress {
    pub fn from_entity(entity: entity::business_address::Model) -> Self {
        Self {
            street: entity.street,
            city: entity.city,
            state: entity.state,
            zip_code: entity.zip_code,
        }
    }

    pub fn from_dto(dto: AddressDto) -> Self {
        Self {
            street: dto.street,
            city: dto.city,
            state: dto.state,
            zip_code: dto.zip_code,
        }
    }

    pub fn into_dto(self) -> AddressDto {
        AddressDto {
            street: self.street,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
        }
    }
}

/// Business account with its registered address.
#[derive(Debug, Clone, PartialEq)]
pub struct Business {
    pub id: i32,
    pub company_name: String,
    pub business_number: String,
    pub email: String,
    pub password_hash: String,
    pub industry_type: IndustryType,
    pub employee_count: i32,
    pub founding_year: i32,
    pub status: String,
    pub marketing_consent: bool,
    pub data_processing_consent: bool,
    pub address: Option<BusinessAddress>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Business {
    pub fn from_entity(
        account: entity::business_account::Model,
        address: Option<entity::business_address::Model>,
    ) -> Self {
        Self {
            id: account.id,
            industry_type: IndustryType::from_column(&account.industry_type),
            company_name: account.company_name,
            business_number: account.business_number,
            email: account.email,
            password_hash: account.password,
            employee_count: account.employee_count,
            founding_year: account.founding_year,
            status: account.status,
            marketing_consent: account.marketing_consent,
            data_processing_consent: account.data_processing_consent,
            address: address.map(BusinessAddress::from_entity),
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }

    pub fn into_dto(self) -> BusinessDto {
        BusinessDto {
            id: self.id,
            company_name: self.company_name,
            business_number: self.business_number,
            email: self.email,
            industry_type: self.industry_type,
            employee_count: self.employee_count,
            founding_year: self.founding_year,
            status: self.status,
            address: self.address.map(BusinessAddress::into_dto),
            marketing_consent: self.marketing_consent,
            data_processing_consent: self.data_processing_consent,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for registering a business; the password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateBusinessParams {
    pub company_name: String,
    pub business_number: String,
    pub email: String,
    pub password_hash: String,
    pub industry_type: IndustryType,
    pub employee_count: i32,
    pub founding_year: i32,
    pub marketing_consent: bool,
    pub data_processing_consent: bool,
    pub address: BusinessAddress,
}

impl CreateBusinessParams {
    pub fn from_dto(dto: CreateBusinessDto, password_hash: String) -> Self {
        Self {
            company_name: dto.company_name,
            business_number: dto.business_number,
            email: dto.email,
            password_hash,
            industry_type: dto.company_details.industry_type,
            employee_count: dto.company_details.employee_count,
            founding_year: dto.company_details.founding_year,
            marketing_consent: dto.agreements.marketing,
            data_processing_consent: dto.agreements.data_processing,
            address: BusinessAddress::from_dto(dto.company_details.address),
        }
    }
}

/// Partial business update spanning account and address columns.
#[derive(Debug, Clone, Default)]
pub struct UpdateBusinessParams {
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub industry_type: Option<IndustryType>,
    pub employee_count: Option<i32>,
    pub founding_year: Option<i32>,
    pub marketing_consent: Option<bool>,
    pub status: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

impl UpdateBusinessParams {
    pub fn from_dto(dto: UpdateBusinessDto, password_hash: Option<String>) -> Self {
        let address = dto.address.unwrap_or_default();
        Self {
            company_name: dto.company_name,
            email: dto.email,
            password_hash,
            industry_type: dto.industry_type,
            employee_count: dto.employee_count,
            founding_year: dto.founding_year,
            marketing_consent: dto.marketing_consent,
            status: None,
            street: address.street,
            city: address.city,
            state: address.state,
            zip_code: address.zip_code,
        }
    }

    pub fn has_address_changes(&self) -> bool {
        self.street.is_some() || self.city.is_some() || self.state.is_some() || self.zip_code.is_some()
    }
}

fn validate_employee_count(count: i32, errors: &mut Vec<String>) {
    if count < 1 {
        errors.push("employeeCount must be at least 1".to_string());
    }
}

fn validate_founding_year(year: i32, errors: &mut Vec<String>) {
    let current_year = Utc::now().year();
    if !(MIN_FOUNDING_YEAR..=current_year).contains(&year) {
        errors.push(format!(
            "foundingYear must be between {} and {}",
            MIN_FOUNDING_YEAR, current_year
        ));
    }
}

fn validate_business_number_format(value: &str, errors: &mut Vec<String>) {
    if !business_number::has_valid_format(value) {
        errors.push("businessNumber must match xxx-xx-xxxxx".to_string());
    }
}

impl Validate for CreateBusinessDto {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let details = &self.company_details;

        validate_length("companyName", &self.company_name, 2, 100, &mut errors);
        validate_business_number_format(&self.business_number, &mut errors);
        validate_email(&self.email, &mut errors);
        validate_password(&self.password, true, &mut errors);
        validate_employee_count(details.employee_count, &mut errors);
        validate_founding_year(details.founding_year, &mut errors);
        validate_length("street", &details.address.street, 1, 200, &mut errors);
        validate_length("city", &details.address.city, 1, 100, &mut errors);
        validate_length("state", &details.address.state, 1, 100, &mut errors);
        validate_zip_code(&details.address.zip_code, &mut errors);
        if !self.agreements.data_processing {
            errors.push("data processing consent is required".to_string());
        }

        errors
    }
}

impl Validate for UpdateBusinessDto {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if let Some(name) = &self.company_name {
            validate_length("companyName", name, 2, 100, &mut errors);
        }
        if let Some(email) = &self.email {
            validate_email(email, &mut errors);
        }
        if let Some(password) = &self.password {
            validate_password(password, true, &mut errors);
        }
        if let Some(count) = self.employee_count {
            validate_employee_count(count, &mut errors);
        }
        if let Some(year) = self.founding_year {
            validate_founding_year(year, &mut errors);
        }
        if let Some(zip_code) = self.address.as_ref().and_then(|a| a.zip_code.as_ref()) {
            validate_zip_code(zip_code, &mut errors);
        }

        errors
    }
}

impl Validate for BusinessNumberDto {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        validate_business_number_format(&self.business_number, &mut errors);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::business::{AgreementsDto, CompanyDetailsDto};

    fn create_dto() -> CreateBusinessDto {
        CreateBusinessDto {
            company_name: "Acme Corp".to_string(),
            business_number: "123-45-67891".to_string(),
            email: "contact@acme.com".to_string(),
            password: "Secret#123".to_string(),
            company_details: CompanyDetailsDto {
                industry_type: IndustryType::Tech,
                employee_count: 25,
                founding_year: 2001,
                address: AddressDto {
                    street: "1 Main St".to_string(),
                    city: "Seoul".to_string(),
                    state: "Seoul".to_string(),
                    zip_code: "04524".to_string(),
                },
            },
            agreements: AgreementsDto {
                data_processing: true,
                marketing: false,
            },
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert!(create_dto().validate().is_empty());
    }

    #[test]
    fn registration_requires_consent_and_strong_password() {
        let mut dto = create_dto();
        dto.password = "password1".to_string();
        dto.agreements.data_processing = false;

        let errors = dto.validate();

        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.contains("consent")));
    }

    #[test]
    fn founding_year_and_zip_are_bounded() {
        let mut dto = create_dto();
        dto.company_details.founding_year = 1700;
        dto.company_details.address.zip_code = "1234".to_string();
        dto.company_details.employee_count = 0;

        assert_eq!(dto.validate().len(), 3);
    }

    #[test]
    fn update_moves_address_fields_into_params() {
        let dto = UpdateBusinessDto {
            company_name: Some("Acme Ltd".to_string()),
            address: Some(crate::model::business::UpdateAddressDto {
                city: Some("Busan".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let params = UpdateBusinessParams::from_dto(dto, None);

        assert_eq!(params.company_name.as_deref(), Some("Acme Ltd"));
        assert_eq!(params.city.as_deref(), Some("Busan"));
        assert!(params.has_address_changes());
    }
}
