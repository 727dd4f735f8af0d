use std::time::Duration as StdDuration;

use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;
use jsonwebtoken::Algorithm;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, ADMINS, MEMBERS},
    model::user::User,
    service::auth::{blocklist::TokenBlocklist, token::TokenService},
};

mod authenticate;
mod bearer;
mod refresh;
mod require;

const SECRET: &str = "middleware-test-secret";

fn tokens() -> TokenService {
    TokenService::new(
        SECRET,
        Algorithm::HS256,
        Duration::minutes(60),
        Duration::days(7),
    )
}

fn blocklist() -> TokenBlocklist {
    TokenBlocklist::memory(StdDuration::from_secs(60))
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

fn domain_user(entity: entity::user::Model) -> User {
    User::from_entity(entity).unwrap()
}
