use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpdateUserParam, User},
    service::auth::{token::EmailPurpose, AuthService},
};

impl<'a> AuthService<'a> {
    /// Mails `user` a link that marks their account as verified.
    pub async fn send_verification(&self, user: &User) -> Result<(), AppError> {
        let token = self
            .tokens
            .create_email_token(&user.email, EmailPurpose::Verification)?;
        let link = self.mailer.link(&format!("/api/v1/auth/verify/{}", token));

        let html = format!(
            "<h1>Verify your Email</h1>\
             <p>Please click this <a href=\"{}\">link</a> to verify your email</p>",
            link
        );

        self.mailer
            .send(&[user.email.clone()], "Verify Your email", &html)
            .await
    }

    /// Marks the account named in a verification token as verified.
    ///
    /// # Returns
    /// - `Ok(User)` - The verified account
    /// - `Err(AuthError::InvalidToken)` - Token is malformed, expired or not for verification
    /// - `Err(AppError::NotFound)` - The account no longer exists
    pub async fn verify_email(&self, token: &str) -> Result<User, AppError> {
        let claims = self
            .tokens
            .decode_email_token(token, EmailPurpose::Verification)?;

        let user_repo = UserRepository::new(self.db);
        let user = user_repo
            .find_by_email(&claims.email)
            .await?
            .ok_or_else(user_not_found)?;

        if user.is_verified {
            return Ok(user);
        }

        let user = user_repo
            .update(
                user.uid,
                UpdateUserParam {
                    is_verified: Some(true),
                    ..Default::default()
                },
            )
            .await?
            .ok_or(AuthError::UserNotInDatabase(user.uid))?;

        tracing::info!("User {} verified their email", user.uid);

        Ok(user)
    }

    /// Mails a password reset link if an account uses `email`.
    ///
    /// Succeeds whether or not the account exists, so the response does not reveal
    /// which addresses are registered.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email).await? else {
            tracing::info!("Password reset requested for unknown email");
            return Ok(());
        };

        let token = self
            .tokens
            .create_email_token(&user.email, EmailPurpose::PasswordReset)?;
        let link = self
            .mailer
            .link(&format!("/api/v1/auth/password-reset-confirm/{}", token));

        let html = format!(
            "<h1>Reset Your Password</h1>\
             <p>Please click this <a href=\"{}\">link</a> to reset your password</p>",
            link
        );

        self.mailer
            .send(&[user.email], "Reset Your Password", &html)
            .await
    }

    /// Sets a new password using a reset token. Each token works once.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced and the token revoked
    /// - `Err(AuthError::InvalidToken)` - Token is malformed, expired or not for resets
    /// - `Err(AuthError::RevokedToken)` - Token was already used
    /// - `Err(AppError::NotFound)` - The account no longer exists
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AppError> {
        let claims = self
            .tokens
            .decode_email_token(token, EmailPurpose::PasswordReset)?;

        if self.blocklist.is_blocked(&claims.jti).await? {
            return Err(AuthError::RevokedToken(claims.jti).into());
        }

        let user_repo = UserRepository::new(self.db);
        let user = user_repo
            .find_by_email(&claims.email)
            .await?
            .ok_or_else(user_not_found)?;

        let password_hash = self.passwords.hash(new_password).await?;
        if !user_repo.set_password(user.uid, password_hash).await? {
            return Err(AuthError::UserNotInDatabase(user.uid).into());
        }

        self.blocklist.add(&claims.jti).await?;

        tracing::info!("User {} reset their password", user.uid);

        Ok(())
    }
}

fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}
