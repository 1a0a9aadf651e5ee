use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateUserParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_email;
mod record_login;
mod update;

fn create_params(email: &str) -> CreateUserParams {
    CreateUserParams {
        name: "Alice".to_string(),
        email: email.to_string(),
        password_hash: "salt:hash".to_string(),
    }
}
