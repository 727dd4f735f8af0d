use super::*;

/// Tests members may pass the member gate but not the admin gate.
///
/// Expected: Ok(User) for MEMBERS, Err(AuthError::InsufficientPermission) for ADMINS
#[tokio::test]
async fn member_is_not_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (tokens, blocklist) = (tokens(), blocklist());

    let user = domain_user(factory::user::create_user(db).await?);
    let headers = bearer(&tokens.create_access_token(&user.token_user())?);
    let guard = AuthGuard::new(db, &tokens, &blocklist, &headers);

    assert_eq!(guard.require(MEMBERS).await?.uid, user.uid);

    match guard.require(ADMINS).await {
        Err(AppError::AuthErr(AuthError::InsufficientPermission(uid, role))) => {
            assert_eq!(uid, user.uid);
            assert_eq!(role, "user");
        }
        other => panic!("Expected InsufficientPermission, got: {:?}", other),
    }

    Ok(())
}

/// Tests admins pass both standard role sets.
///
/// Expected: Ok(User) for MEMBERS and ADMINS
#[tokio::test]
async fn admin_passes_every_set() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (tokens, blocklist) = (tokens(), blocklist());

    let admin = domain_user(factory::user::create_admin(db).await?);
    let headers = bearer(&tokens.create_access_token(&admin.token_user())?);
    let guard = AuthGuard::new(db, &tokens, &blocklist, &headers);

    assert!(guard.require(MEMBERS).await?.is_admin());
    assert!(guard.require(ADMINS).await?.is_admin());

    Ok(())
}

/// Tests an empty role set denies everyone.
///
/// Expected: Err(AuthError::InsufficientPermission)
#[tokio::test]
async fn empty_set_denies_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (tokens, blocklist) = (tokens(), blocklist());

    let admin = domain_user(factory::user::create_admin(db).await?);
    let headers = bearer(&tokens.create_access_token(&admin.token_user())?);

    let result = AuthGuard::new(db, &tokens, &blocklist, &headers)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InsufficientPermission(_, _)))
    ));

    Ok(())
}
