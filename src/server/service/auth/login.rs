use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::LoginSession,
    service::auth::AuthService,
};

impl<'a> AuthService<'a> {
    /// Checks an email and password pair and issues an access and refresh token.
    ///
    /// Unknown emails and wrong passwords fail the same way.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginSession, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email.trim()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !self.passwords.verify(password, &user.password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token_user = user.token_user();
        let access_token = self.tokens.create_access_token(&token_user)?;
        let refresh_token = self.tokens.create_refresh_token(&token_user)?;

        tracing::debug!("User {} logged in", user.uid);

        Ok(LoginSession {
            access_token,
            refresh_token,
            user,
        })
    }
}
