use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to sign a JWT
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to encode token: {0}")]
    TokenEncode(#[source] jsonwebtoken::errors::Error),

    /// Failure to hash a password with bcrypt
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to hash password: {0}")]
    PasswordHash(#[source] bcrypt::BcryptError),

    /// A task on the blocking pool panicked or was cancelled
    #[error("Blocking task failed: {0}")]
    BlockingTask(#[source] tokio::task::JoinError),

    /// Outgoing message could not be assembled (bad recipient, header, etc.)
    #[error("Failed to build mail message: {0}")]
    MailMessage(#[source] lettre::error::Error),

    /// SMTP relay rejected the message or could not be reached
    #[error("Failed to deliver mail: {0}")]
    MailTransport(#[source] lettre::transport::smtp::Error),

    /// Entity row stored a value the domain model cannot represent
    #[error("Stored {field} value '{value}' is invalid")]
    InvalidStoredValue {
        /// Column holding the value
        field: &'static str,
        /// The value that failed to convert
        value: String,
    },
}
