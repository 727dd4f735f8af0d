use std::time::Duration;

use crate::server::{
    config::Config,
    error::AppError,
    service::{auth::blocklist::TokenBlocklist, mail::Mailer},
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date. This function must
/// complete successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the token blocklist.
///
/// Uses Redis when `REDIS_URL` is configured. Without it, revoked tokens are kept in
/// process memory, which is lost on restart and not shared between instances.
///
/// # Returns
/// - `Ok(TokenBlocklist)` - Redis-backed or in-process blocklist
/// - `Err(AppError::RedisErr)` - Invalid Redis URL or the server is unreachable
pub async fn connect_to_blocklist(config: &Config) -> Result<TokenBlocklist, AppError> {
    let ttl = Duration::from_secs(config.jti_expiry_seconds);

    let Some(redis_url) = &config.redis_url else {
        tracing::warn!("REDIS_URL is not set, revoked tokens are stored in memory");
        return Ok(TokenBlocklist::memory(ttl));
    };

    let client = redis::Client::open(redis_url.as_str())?;
    let connection = redis::aio::ConnectionManager::new(client).await?;

    tracing::info!("Connected to Redis token blocklist");

    Ok(TokenBlocklist::redis(connection, ttl))
}

/// Creates the outgoing mail transport.
///
/// Uses SMTP when `MAIL_SERVER` is configured. Without it, messages are only logged and
/// kept in a bounded in-process outbox.
pub fn build_mailer(config: &Config) -> Result<Mailer, AppError> {
    let Some(mail) = &config.mail else {
        tracing::warn!("MAIL_SERVER is not set, outgoing mail is not delivered");
        return Ok(Mailer::memory(config.mail_from.clone(), &config.domain));
    };

    let mailer = Mailer::smtp(mail, config.mail_from.clone(), &config.domain)?;

    tracing::info!("Sending mail through {}:{}", mail.server, mail.port);

    Ok(mailer)
}
