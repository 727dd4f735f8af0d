use super::*;

/// Tests replacing a job swaps its fields and skills but keeps listing metadata.
///
/// Expected: Ok(Some) with the new values and the original date_listed and hirer
#[tokio::test]
async fn replaces_fields_and_skills() -> Result<(), AppError> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hirer = factory::user::create_user(db).await?;
    let location = factory::location::create_location(db).await?;
    let other_location = factory::location::create_location_in(db, "Berlin", "Germany").await?;

    let repo = JobRepository::new(db);
    let original = repo
        .create(hirer.uid, job_param(location.uid, &["Rust"]))
        .await?;

    let mut param = job_param(other_location.uid, &["Go", "Kubernetes"]);
    param.title = "Platform engineer".to_string();
    param.contract_type = ContractType::Permanent;

    let replaced = repo.replace(original.uid, param).await?.unwrap();

    assert_eq!(replaced.title, "Platform engineer");
    assert_eq!(replaced.contract_type, ContractType::Permanent);
    assert_eq!(replaced.location.city, "Berlin");
    assert_eq!(replaced.skills, vec!["Go", "Kubernetes"]);
    assert_eq!(replaced.hirer_uid, hirer.uid);
    assert_eq!(replaced.date_listed, original.date_listed);

    Ok(())
}

/// Tests replacing a job that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_job() -> Result<(), AppError> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::location::create_location(db).await?;

    let repo = JobRepository::new(db);

    assert!(repo
        .replace(Uuid::new_v4(), job_param(location.uid, &[]))
        .await?
        .is_none());

    Ok(())
}
