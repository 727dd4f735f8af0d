use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, Role, SignupParam, User},
    service::auth::AuthService,
};

impl<'a> AuthService<'a> {
    /// Registers a new account with the `user` role and mails a verification link.
    ///
    /// A failed verification email is logged and does not fail the signup.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::Conflict)` - An account with that email already exists
    pub async fn signup(&self, param: SignupParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.email_exists(&param.email).await? {
            return Err(AppError::Conflict(
                "User with this email already exists".to_string(),
            ));
        }

        let password_hash = self.passwords.hash(&param.password).await?;

        let user = user_repo
            .create(CreateUserParam {
                username: param.username,
                first_name: param.first_name,
                last_name: param.last_name,
                email: param.email,
                password_hash,
                role: Role::User,
            })
            .await?;

        tracing::info!("User {} signed up", user.uid);

        if let Err(err) = self.send_verification(&user).await {
            tracing::warn!("Failed to send verification email to user {}: {}", user.uid, err);
        }

        Ok(user)
    }
}
