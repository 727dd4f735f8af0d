use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, Role, UpdateUserParam},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_email;
mod get_all_paginated;
mod set_password;
mod update;

fn create_param(username: &str, email: &str) -> CreateUserParam {
    CreateUserParam {
        username: username.to_string(),
        first_name: None,
        last_name: None,
        email: email.to_string(),
        password_hash: "hash".to_string(),
        role: Role::User,
    }
}
