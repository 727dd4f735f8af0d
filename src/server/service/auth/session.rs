use crate::server::{
    error::AppError,
    service::auth::{token::Claims, AuthService},
};

impl<'a> AuthService<'a> {
    /// Issues a fresh access token for the identity in already verified refresh claims.
    pub fn refresh(&self, claims: &Claims) -> Result<String, AppError> {
        Ok(self.tokens.create_access_token(&claims.user)?)
    }

    /// Revokes the token the claims were decoded from.
    pub async fn logout(&self, claims: &Claims) -> Result<(), AppError> {
        self.blocklist.add(&claims.jti).await?;

        tracing::info!("Revoked token {} for user {}", claims.jti, claims.user.user_uid);

        Ok(())
    }
}
