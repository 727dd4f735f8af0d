//! Bearer-token gates and the role checker.
//!
//! `AuthGuard` reads the `Authorization` header of a request, verifies the JWT, consults
//! the token blocklist, and resolves the current user. Handlers pick the gate they need:
//! `authenticate` for any signed-in user, `require` to also check the user's role, and
//! `refresh` for endpoints that only accept refresh tokens.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{Role, User},
    service::auth::{
        blocklist::TokenBlocklist,
        token::{Claims, TokenService},
    },
};

/// Roles allowed on endpoints open to every account.
pub const MEMBERS: &[Role] = &[Role::Admin, Role::User];

/// Roles allowed on administrative endpoints.
pub const ADMINS: &[Role] = &[Role::Admin];

/// Extracts the token from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively. Returns `None` when the header is missing,
/// not valid ASCII, uses another scheme, or carries an empty token.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Checks `user`'s role against an allowed set.
pub fn check_role(user: &User, allowed: &[Role]) -> Result<(), AuthError> {
    if allowed.contains(&user.role) {
        return Ok(());
    }

    Err(AuthError::InsufficientPermission(
        user.uid,
        user.role.to_string(),
    ))
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    blocklist: &'a TokenBlocklist,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        blocklist: &'a TokenBlocklist,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            tokens,
            blocklist,
            headers,
        }
    }

    /// Access gate: accepts a valid, unrevoked access token whose user still exists.
    ///
    /// # Returns
    /// - `Ok((User, Claims))` - Current user and the verified claims
    /// - `Err(AuthError::NotAuthenticated)` - No usable bearer header
    /// - `Err(AuthError::InvalidToken)` - Bad signature or expired
    /// - `Err(AuthError::RevokedToken)` - Token id is in the blocklist
    /// - `Err(AuthError::AccessTokenRequired)` - A refresh token was presented
    /// - `Err(AuthError::UserNotInDatabase)` - Token user no longer exists
    pub async fn authenticate(&self) -> Result<(User, Claims), AppError> {
        let claims = self.verified_claims().await?;

        if claims.refresh {
            return Err(AuthError::AccessTokenRequired.into());
        }

        let user_repo = UserRepository::new(self.db);
        let user_uid = claims.user.user_uid;

        let Some(user) = user_repo.find_by_uid(user_uid).await? else {
            return Err(AuthError::UserNotInDatabase(user_uid).into());
        };

        Ok((user, claims))
    }

    /// Access gate followed by the role checker.
    ///
    /// # Returns
    /// - `Ok(User)` - Current user, whose role is in `allowed`
    /// - `Err(AuthError::InsufficientPermission)` - Role outside `allowed`
    /// - Any error from [`AuthGuard::authenticate`]
    pub async fn require(&self, allowed: &[Role]) -> Result<User, AppError> {
        let (user, _) = self.authenticate().await?;

        check_role(&user, allowed)?;

        Ok(user)
    }

    /// Refresh gate: accepts a valid, unrevoked refresh token.
    pub async fn refresh(&self) -> Result<Claims, AppError> {
        let claims = self.verified_claims().await?;

        if !claims.refresh {
            return Err(AuthError::RefreshTokenRequired.into());
        }

        Ok(claims)
    }

    async fn verified_claims(&self) -> Result<Claims, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::NotAuthenticated)?;
        let claims = self.tokens.decode(token)?;

        if self.blocklist.is_blocked(&claims.jti).await? {
            return Err(AuthError::RevokedToken(claims.jti).into());
        }

        Ok(claims)
    }
}
