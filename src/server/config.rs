use std::str::FromStr;

use jsonwebtoken::Algorithm;
use lettre::message::Mailbox;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 60;
const DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;
const DEFAULT_JTI_EXPIRY_SECONDS: u64 = 3600;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_BCRYPT_COST: u32 = 12;
const DEFAULT_MAIL_PORT: u16 = 587;
const DEFAULT_MAIL_FROM: &str = "noreply@bookly.local";
const DEFAULT_MAIL_FROM_NAME: &str = "Bookly";
const DEFAULT_DOMAIN: &str = "localhost:8000";

/// Deployment environment, selecting the default Host allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Hosts accepted when `ALLOWED_HOSTS` is not set.
    pub fn default_allowed_hosts(&self) -> Vec<String> {
        let hosts: &[&str] = match self {
            Self::Development => &["127.0.0.1", "localhost"],
            Self::Staging => &["staging.domain.com", "www.staging.domain.com"],
            Self::Production => &["domain.com", "www.domain.com"],
        };

        hosts.iter().map(|h| h.to_string()).collect()
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            _ => Err(()),
        }
    }
}

/// SMTP relay settings, present only when `MAIL_SERVER` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub server: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Upgrade a plain connection with STARTTLS.
    pub starttls: bool,
    /// Connect over implicit TLS. Takes precedence over `starttls`.
    pub ssl_tls: bool,
}

pub struct Config {
    pub database_url: String,
    pub redis_url: Option<String>,
    pub bind_address: String,

    pub jwt_secret: String,
    pub jwt_algorithm: Algorithm,
    pub access_token_expiry_minutes: i64,
    pub refresh_token_expiry_days: i64,
    pub jti_expiry_seconds: u64,
    pub bcrypt_cost: u32,

    pub environment: Environment,
    pub allowed_hosts: Vec<String>,

    pub mail: Option<MailConfig>,
    pub mail_from: Mailbox,
    /// Host (and port) used to build links in outgoing mail.
    pub domain: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required =
            |name: &str| get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let environment = match get("ENVIRONMENT") {
            Some(value) => parse_value("ENVIRONMENT", value)?,
            None => Environment::Development,
        };

        let allowed_hosts = match get("ALLOWED_HOSTS") {
            Some(value) => value
                .split(',')
                .map(|h| h.trim().to_ascii_lowercase())
                .filter(|h| !h.is_empty())
                .collect(),
            None => environment.default_allowed_hosts(),
        };

        let bcrypt_cost = match get("BCRYPT_COST") {
            Some(value) => {
                let cost: u32 = parse_value("BCRYPT_COST", value.clone())?;
                if !(4..=31).contains(&cost) {
                    return Err(invalid("BCRYPT_COST", value).into());
                }
                cost
            }
            None => DEFAULT_BCRYPT_COST,
        };

        let mail = match get("MAIL_SERVER") {
            Some(server) => Some(MailConfig {
                server: server.trim().to_string(),
                port: parse_or("MAIL_PORT", get("MAIL_PORT"), DEFAULT_MAIL_PORT)?,
                username: get("MAIL_USERNAME"),
                password: get("MAIL_PASSWORD"),
                starttls: parse_or("MAIL_STARTTLS", get("MAIL_STARTTLS"), true)?,
                ssl_tls: parse_or("MAIL_SSL_TLS", get("MAIL_SSL_TLS"), false)?,
            }),
            None => None,
        };

        let from_address = get("MAIL_FROM").unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string());
        let from_name = get("MAIL_FROM_NAME").unwrap_or_else(|| DEFAULT_MAIL_FROM_NAME.to_string());
        let mail_from = Mailbox::new(
            Some(from_name),
            from_address
                .trim()
                .parse()
                .map_err(|_| invalid("MAIL_FROM", from_address.clone()))?,
        );

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            redis_url: get("REDIS_URL"),
            bind_address: get("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            jwt_secret: required("JWT_SECRET")?,
            jwt_algorithm: match get("JWT_ALGORITHM") {
                Some(value) => parse_algorithm(value)?,
                None => Algorithm::HS256,
            },
            access_token_expiry_minutes: parse_or(
                "ACCESS_TOKEN_EXPIRY_MINUTES",
                get("ACCESS_TOKEN_EXPIRY_MINUTES"),
                DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES,
            )?,
            refresh_token_expiry_days: parse_or(
                "REFRESH_TOKEN_EXPIRY_DAYS",
                get("REFRESH_TOKEN_EXPIRY_DAYS"),
                DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS,
            )?,
            jti_expiry_seconds: parse_or(
                "JTI_EXPIRY",
                get("JTI_EXPIRY"),
                DEFAULT_JTI_EXPIRY_SECONDS,
            )?,
            bcrypt_cost,
            environment,
            allowed_hosts,
            mail,
            mail_from,
            domain: get("DOMAIN").unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
        })
    }
}

fn invalid(name: &str, value: String) -> ConfigError {
    ConfigError::InvalidValue {
        name: name.to_string(),
        value,
    }
}

fn parse_value<T: FromStr>(name: &str, value: String) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| invalid(name, value))
}

fn parse_or<T: FromStr>(name: &str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        Some(value) => parse_value(name, value),
        None => Ok(default),
    }
}

/// Only the HMAC family is accepted since tokens are signed with a shared secret.
fn parse_algorithm(value: String) -> Result<Algorithm, ConfigError> {
    match value.trim().to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        _ => Err(invalid("JWT_ALGORITHM", value)),
    }
}
