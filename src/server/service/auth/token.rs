//! JWT issuance and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::server::{
    config::Config,
    error::{auth::AuthError, internal::InternalError},
};

/// Identity embedded in every token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUser {
    pub email: String,
    pub user_uid: Uuid,
}

/// Claims carried by access and refresh tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user: TokenUser,
    /// Expiry as unix seconds.
    pub exp: i64,
    /// Issue time as unix seconds.
    pub iat: i64,
    /// Unique token id, used as the blocklist key.
    pub jti: String,
    pub refresh: bool,
}

/// What an emailed token may be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailPurpose {
    Verification,
    PasswordReset,
}

impl EmailPurpose {
    fn ttl(&self) -> Duration {
        match self {
            Self::Verification => Duration::days(1),
            Self::PasswordReset => Duration::hours(1),
        }
    }
}

/// Claims carried by tokens embedded in emailed links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailClaims {
    pub email: String,
    pub purpose: EmailPurpose,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

/// Signs and verifies HMAC JWTs with the configured secret and lifetimes.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    pub fn new(
        secret: &str,
        algorithm: Algorithm,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
            access_ttl,
            refresh_ttl,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.jwt_secret,
            config.jwt_algorithm,
            Duration::minutes(config.access_token_expiry_minutes),
            Duration::days(config.refresh_token_expiry_days),
        )
    }

    pub fn create_access_token(&self, user: &TokenUser) -> Result<String, InternalError> {
        self.create_token(user, self.access_ttl, false)
    }

    pub fn create_refresh_token(&self, user: &TokenUser) -> Result<String, InternalError> {
        self.create_token(user, self.refresh_ttl, true)
    }

    fn create_token(
        &self,
        user: &TokenUser,
        ttl: Duration,
        refresh: bool,
    ) -> Result<String, InternalError> {
        let now = Utc::now();
        let claims = Claims {
            user: user.clone(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
            refresh,
        };

        jsonwebtoken::encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(InternalError::TokenEncode)
    }

    /// Signs a single-purpose token for an emailed link.
    pub fn create_email_token(
        &self,
        email: &str,
        purpose: EmailPurpose,
    ) -> Result<String, InternalError> {
        let now = Utc::now();
        let claims = EmailClaims {
            email: email.to_string(),
            purpose,
            exp: (now + purpose.ttl()).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        jsonwebtoken::encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(InternalError::TokenEncode)
    }

    /// Verifies an emailed token and that it was issued for `purpose`.
    pub fn decode_email_token(
        &self,
        token: &str,
        purpose: EmailPurpose,
    ) -> Result<EmailClaims, AuthError> {
        let claims = self.decode_claims::<EmailClaims>(token)?;

        if claims.purpose != purpose {
            tracing::warn!("Rejected {:?} token used for {:?}", claims.purpose, purpose);
            return Err(AuthError::InvalidToken);
        }

        Ok(claims)
    }

    /// Verifies the signature and expiry of a token and returns its claims.
    ///
    /// Every failure collapses into `AuthError::InvalidToken`; the cause is only logged.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        self.decode_claims::<Claims>(token)
    }

    fn decode_claims<T: serde::de::DeserializeOwned>(&self, token: &str) -> Result<T, AuthError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        match jsonwebtoken::decode::<T>(token, &self.decoding_key, &validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => {
                match e.kind() {
                    ErrorKind::ExpiredSignature => tracing::warn!("Rejected expired token"),
                    _ => tracing::warn!("Rejected token: {}", e),
                }
                Err(AuthError::InvalidToken)
            }
        }
    }
}
