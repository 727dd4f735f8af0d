use axum::{
    extract::{Path, State},
    http::HeaderMap,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        mail::{PasswordResetConfirmDto, PasswordResetRequestDto},
        user::{AccessTokenDto, LoginDto, LoginResponseDto, SignupDto, UserDto, UserProfileDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, MEMBERS},
        model::{
            mail::{PasswordResetConfirmParam, PasswordResetRequestParam},
            user::SignupParam,
        },
        service::{auth::AuthService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// New accounts always get the `user` role and start unverified. A verification link
/// is mailed to the new address.
///
/// # Returns
/// - `201 Created` - The created user
/// - `409 Conflict` - Email already registered
/// - `422 Unprocessable Entity` - Invalid username, email, or password
#[utoipa::path(
    post,
    path = "/api/v1/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 422, description = "Invalid signup data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(
        &state.db,
        &state.tokens,
        &state.passwords,
        &state.blocklist,
        &state.mailer,
    );

    let param = SignupParam::from_dto(payload)?;
    let user = service.signup(param).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Access token, refresh token, and the user's email and uid
/// - `403 Forbidden` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponseDto),
        (status = 403, description = "Invalid Email or Password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(
        &state.db,
        &state.tokens,
        &state.passwords,
        &state.blocklist,
        &state.mailer,
    );

    let session = service.login(&payload.email, &payload.password).await?;

    Ok(Json(session.into_dto()))
}

/// Exchange a refresh token for a new access token.
#[utoipa::path(
    get,
    path = "/api/v1/auth/refresh_token",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "New access token", body = AccessTokenDto),
        (status = 403, description = "Missing, invalid, revoked, or non-refresh token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn refresh_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .refresh()
        .await?;

    let service = AuthService::new(
        &state.db,
        &state.tokens,
        &state.passwords,
        &state.blocklist,
        &state.mailer,
    );
    let access_token = service.refresh(&claims)?;

    Ok(Json(AccessTokenDto { access_token }))
}

/// Revoke the access token used for this request.
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged Out Successfully", body = MessageDto),
        (status = 403, description = "Missing, invalid, or revoked access token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let (_, claims) = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .authenticate()
        .await?;

    let service = AuthService::new(
        &state.db,
        &state.tokens,
        &state.passwords,
        &state.blocklist,
        &state.mailer,
    );
    service.logout(&claims).await?;

    Ok(Json(MessageDto {
        message: "Logged Out Successfully".to_string(),
    }))
}

/// Get the current user with their books and reviews.
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user profile", body = UserProfileDto),
        (status = 403, description = "Not authenticated or not permitted", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(MEMBERS)
        .await?;

    let profile = UserService::new(&state.db).get_profile(user).await?;

    Ok(Json(profile.into_dto()))
}

/// Mark the account from an emailed verification link as verified.
///
/// # Returns
/// - `200 OK` - Account verified
/// - `403 Forbidden` - Token invalid, expired, or not a verification token
/// - `404 Not Found` - Account no longer exists
#[utoipa::path(
    get,
    path = "/api/v1/auth/verify/{token}",
    tag = AUTH_TAG,
    params(("token" = String, Path, description = "Token from the verification email")),
    responses(
        (status = 200, description = "Account verified successfully", body = MessageDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_email(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(
        &state.db,
        &state.tokens,
        &state.passwords,
        &state.blocklist,
        &state.mailer,
    );
    service.verify_email(&token).await?;

    Ok(Json(MessageDto {
        message: "Account verified successfully".to_string(),
    }))
}

/// Request a password reset link.
///
/// Responds the same way whether or not the email is registered.
#[utoipa::path(
    post,
    path = "/api/v1/auth/password-reset-request",
    tag = AUTH_TAG,
    request_body = PasswordResetRequestDto,
    responses(
        (status = 200, description = "Reset instructions sent if the account exists", body = MessageDto),
        (status = 422, description = "Invalid email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn password_reset_request(
    State(state): State<AppState>,
    Json(payload): Json<PasswordResetRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = PasswordResetRequestParam::from_dto(payload)?;

    let service = AuthService::new(
        &state.db,
        &state.tokens,
        &state.passwords,
        &state.blocklist,
        &state.mailer,
    );
    service.request_password_reset(&param.email).await?;

    Ok(Json(MessageDto {
        message: "Please check your email for instructions to reset your password".to_string(),
    }))
}

/// Set a new password with the token from a reset email.
///
/// # Returns
/// - `200 OK` - Password replaced; the token cannot be used again
/// - `400 Bad Request` - Passwords do not match
/// - `403 Forbidden` - Token invalid, expired, already used, or not a reset token
/// - `404 Not Found` - Account no longer exists
/// - `422 Unprocessable Entity` - Password shorter than 6 characters
#[utoipa::path(
    post,
    path = "/api/v1/auth/password-reset-confirm/{token}",
    tag = AUTH_TAG,
    params(("token" = String, Path, description = "Token from the reset email")),
    request_body = PasswordResetConfirmDto,
    responses(
        (status = 200, description = "Password reset successfully", body = MessageDto),
        (status = 400, description = "Passwords do not match", body = ErrorDto),
        (status = 403, description = "Invalid, expired, or used token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 422, description = "Password too short", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn password_reset_confirm(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(payload): Json<PasswordResetConfirmDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = PasswordResetConfirmParam::from_dto(payload)?;

    let service = AuthService::new(
        &state.db,
        &state.tokens,
        &state.passwords,
        &state.blocklist,
        &state.mailer,
    );
    service.reset_password(&token, &param.new_password).await?;

    Ok(Json(MessageDto {
        message: "Password reset Successfully".to_string(),
    }))
}
