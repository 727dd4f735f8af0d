use super::*;

/// Tests updating role and verification together.
///
/// Expected: Ok(Some) with both fields changed
#[tokio::test]
async fn updates_role_and_verification() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.uid,
            UpdateUserParam {
                role: Some(Role::Admin),
                is_verified: Some(true),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.role, Role::Admin);
    assert!(updated.is_verified);

    Ok(())
}

/// Tests absent fields are left untouched.
///
/// Expected: Ok(Some) with only the verification flag changed
#[tokio::test]
async fn leaves_absent_fields_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_admin(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.uid,
            UpdateUserParam {
                role: None,
                is_verified: Some(true),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.role, Role::Admin);
    assert!(updated.is_verified);

    Ok(())
}

/// Tests updating a missing user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(uuid::Uuid::new_v4(), UpdateUserParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
