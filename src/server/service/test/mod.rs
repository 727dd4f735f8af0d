use sea_orm::DatabaseConnection;

use crate::server::{error::AppError, model::user::User};


/// Loads a factory-created user row as a domain user.
fn domain_user(entity: entity::user::Model) -> User {
    User::from_entity(entity).unwrap()
}

/// Creates a user with the `user` role and returns it as a domain user.
async fn member(db: &DatabaseConnection) -> Result<User, AppError> {
    Ok(domain_user(test_utils::factory::user::create_user(db).await?))
}

/// Creates a user with the `admin` role and returns it as a domain user.
async fn admin(db: &DatabaseConnection) -> Result<User, AppError> {
    Ok(domain_user(test_utils::factory::user::create_admin(db).await?))
}
