use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository inserts a user with the `user` role, unverified,
/// and that the stored row can be read back by uid.
///
/// Expected: Ok with the created user
#[tokio::test]
async fn creates_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_param("reader", "reader@example.com")).await?;

    assert_eq!(user.username, "reader");
    assert_eq!(user.role, Role::User);
    assert!(!user.is_verified);

    let found = repo.find_by_uid(user.uid).await?;
    assert_eq!(found, Some(user));

    Ok(())
}

/// Tests duplicate emails are rejected by the database.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("first", "same@example.com")).await?;

    let result = repo.create(create_param("second", "same@example.com")).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
