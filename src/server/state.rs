//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by
//! the handlers. The state is initialized once during startup and then cloned for each
//! request through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::service::{
    auth::{blocklist::TokenBlocklist, password::PasswordService, token::TokenService},
    mail::Mailer,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the database connection is a pool, the blocklist
/// shares its Redis connection manager or in-process map, and the token keys are
/// small.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs and verifies access and refresh tokens.
    pub tokens: TokenService,

    /// Hashes and verifies account passwords.
    pub passwords: PasswordService,

    /// Revoked token ids, consulted by every bearer-token gate.
    pub blocklist: TokenBlocklist,

    /// Outgoing mail, SMTP or the in-process outbox.
    pub mailer: Mailer,

    /// Hostnames accepted in the `Host` header.
    pub allowed_hosts: Vec<String>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        passwords: PasswordService,
        blocklist: TokenBlocklist,
        mailer: Mailer,
        allowed_hosts: Vec<String>,
    ) -> Self {
        Self {
            db,
            tokens,
            passwords,
            blocklist,
            mailer,
            allowed_hosts,
        }
    }
}
