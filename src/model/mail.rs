use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Recipients of the welcome message sent by `/api/v1/send_mail`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SendMailDto {
    pub addresses: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PasswordResetRequestDto {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PasswordResetConfirmDto {
    pub new_password: String,
    pub confirm_new_password: String,
}
