use super::*;

/// Tests creating a job with skills.
///
/// Expected: Ok with a visible job carrying its location and skills in order
#[tokio::test]
async fn creates_visible_job_with_skills() -> Result<(), AppError> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hirer = factory::user::create_user(db).await?;
    let location = factory::location::create_location(db).await?;

    let repo = JobRepository::new(db);
    let job = repo
        .create(hirer.uid, job_param(location.uid, &["Rust", "Postgres"]))
        .await?;

    assert!(job.visible);
    assert_eq!(job.hirer_uid, hirer.uid);
    assert_eq!(job.location.uid, location.uid);
    assert_eq!(job.rate.currency, "EUR");
    assert_eq!(job.skills, vec!["Rust", "Postgres"]);
    assert_eq!(repo.find_by_uid(job.uid).await?, Some(job));

    Ok(())
}

/// Tests finding a job that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_job() -> Result<(), AppError> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = JobRepository::new(db);

    assert!(repo.find_by_uid(Uuid::new_v4()).await?.is_none());

    Ok(())
}
