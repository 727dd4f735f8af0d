//! Parameters for outgoing mail and the password reset flow.

use crate::{
    model::mail::{PasswordResetConfirmDto, PasswordResetRequestDto, SendMailDto},
    server::{error::AppError, util::validate},
};

const MAX_RECIPIENTS: usize = 50;

/// Validated recipient list for an ad-hoc message.
#[derive(Debug, Clone)]
pub struct SendMailParam {
    pub addresses: Vec<String>,
}

impl SendMailParam {
    /// # Returns
    /// - `Err(AppError::Unprocessable)` - No recipients, too many, or a malformed address
    pub fn from_dto(dto: SendMailDto) -> Result<Self, AppError> {
        if dto.addresses.is_empty() || dto.addresses.len() > MAX_RECIPIENTS {
            return Err(AppError::Unprocessable(format!(
                "addresses must contain between 1 and {} entries",
                MAX_RECIPIENTS
            )));
        }

        let addresses = dto
            .addresses
            .into_iter()
            .map(validate::email)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { addresses })
    }
}

#[derive(Debug, Clone)]
pub struct PasswordResetRequestParam {
    pub email: String,
}

impl PasswordResetRequestParam {
    pub fn from_dto(dto: PasswordResetRequestDto) -> Result<Self, AppError> {
        Ok(Self {
            email: validate::email(dto.email)?,
        })
    }
}

/// New password for a reset, confirmed by repetition.
#[derive(Debug, Clone)]
pub struct PasswordResetConfirmParam {
    pub new_password: String,
}

impl PasswordResetConfirmParam {
    /// # Returns
    /// - `Err(AppError::BadRequest)` - The two passwords differ
    /// - `Err(AppError::Unprocessable)` - Password shorter than 6 characters
    pub fn from_dto(dto: PasswordResetConfirmDto) -> Result<Self, AppError> {
        if dto.new_password != dto.confirm_new_password {
            return Err(AppError::BadRequest("Passwords do not match".to_string()));
        }

        Ok(Self {
            new_password: validate::password("new_password", dto.new_password)?,
        })
    }
}
