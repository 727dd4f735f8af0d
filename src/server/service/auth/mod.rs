//! Account authentication: signup, login, token refresh and revocation, email
//! verification and password reset.

use sea_orm::DatabaseConnection;

use crate::server::service::{
    auth::{blocklist::TokenBlocklist, password::PasswordService, token::TokenService},
    mail::Mailer,
};

pub mod blocklist;
pub mod email;
pub mod login;
pub mod password;
pub mod session;
pub mod signup;
pub mod token;

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub tokens: &'a TokenService,
    pub passwords: &'a PasswordService,
    pub blocklist: &'a TokenBlocklist,
    pub mailer: &'a Mailer,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        passwords: &'a PasswordService,
        blocklist: &'a TokenBlocklist,
        mailer: &'a Mailer,
    ) -> Self {
        Self {
            db,
            tokens,
            passwords,
            blocklist,
            mailer,
        }
    }
}
