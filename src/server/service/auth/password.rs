//! Bcrypt password hashing.
//!
//! Hashing and verification run on tokio's blocking pool so a slow work factor does
//! not hold up the async workers.

use crate::server::error::internal::InternalError;

#[derive(Clone, Copy)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub async fn hash(&self, password: &str) -> Result<String, InternalError> {
        let password = password.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(InternalError::BlockingTask)?
            .map_err(InternalError::PasswordHash)
    }

    /// Returns `Ok(false)` on mismatch and on malformed hashes.
    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool, InternalError> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(InternalError::BlockingTask)?;

        Ok(verified.unwrap_or(false))
    }
}
