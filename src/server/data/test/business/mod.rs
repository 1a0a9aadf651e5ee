use crate::{
    model::business::IndustryType,
    server::{
        data::business::BusinessRepository,
        model::business::{
            BusinessAddress, CreateBusinessParams, UpdateBusinessParams, STATUS_ACTIVE,
        },
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
mod update;

fn create_params(business_number: &str, email: &str) -> CreateBusinessParams {
    CreateBusinessParams {
        company_name: "Acme Corp".to_string(),
        business_number: business_number.to_string(),
        email: email.to_string(),
        password_hash: "salt:hash".to_string(),
        industry_type: IndustryType::Tech,
        employee_count: 25,
        founding_year: 2001,
        marketing_consent: false,
        data_processing_consent: true,
        address: BusinessAddress {
            street: "1 Main St".to_string(),
            city: "Seoul".to_string(),
            state: "Jung-gu".to_string(),
            zip_code: "04524".to_string(),
        },
    }
}
