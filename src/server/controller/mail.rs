use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        mail::SendMailDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, ADMINS},
        model::mail::SendMailParam,
        state::AppState,
    },
};

/// Tag for grouping mail endpoints in OpenAPI documentation
pub static MAIL_TAG: &str = "mail";

/// Send the welcome message to a list of addresses.
///
/// # Access Control
/// - `Admin` - Only admins can send mail to arbitrary addresses
///
/// # Returns
/// - `200 OK` - Message handed to the mail transport
/// - `403 Forbidden` - Not authenticated or not an admin
/// - `422 Unprocessable Entity` - No recipients, too many, or a malformed address
#[utoipa::path(
    post,
    path = "/api/v1/send_mail",
    tag = MAIL_TAG,
    request_body = SendMailDto,
    responses(
        (status = 200, description = "Email sent successfully", body = MessageDto),
        (status = 403, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 422, description = "Invalid recipients", body = ErrorDto),
        (status = 500, description = "Mail could not be delivered", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn send_mail(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SendMailDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(ADMINS)
        .await?;

    let param = SendMailParam::from_dto(payload)?;

    state
        .mailer
        .send(&param.addresses, "Welcome to our app", "<h1>Welcome to the app</h1>")
        .await?;

    Ok(Json(MessageDto {
        message: "Email sent successfully".to_string(),
    }))
}
