//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and convenience methods for creating
//! entities together with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a book owned by that user.
///
/// # Returns
/// - `Ok((user, book))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_book_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::book::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let book = crate::factory::book::create_book(db, user.uid).await?;

    Ok((user, book))
}

/// Creates a hirer, a location, and a visible job listing posted by the hirer.
///
/// # Returns
/// - `Ok((hirer, location, job))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_job_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::location::Model,
        entity::job::Model,
    ),
    DbErr,
> {
    let hirer = crate::factory::user::create_user(db).await?;
    let location = crate::factory::location::create_location(db).await?;
    let job = crate::factory::job::create_job(db, location.uid, hirer.uid).await?;

    Ok((hirer, location, job))
}
