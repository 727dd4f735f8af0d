use super::*;

/// Tests hiding and showing a job again.
///
/// Expected: Ok(Some) reflecting the new visibility each time
#[tokio::test]
async fn toggles_visibility() -> Result<(), AppError> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, job) = factory::helpers::create_job_with_dependencies(db).await?;

    let repo = JobRepository::new(db);

    let hidden = repo.set_visible(job.uid, false).await?.unwrap();
    assert!(!hidden.visible);
    assert_eq!(repo.get_visible_page(&filter(1, 10)).await?.1, 0);

    let shown = repo.set_visible(job.uid, true).await?.unwrap();
    assert!(shown.visible);

    Ok(())
}

/// Tests changing visibility of a job that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_job() -> Result<(), AppError> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = JobRepository::new(db);

    assert!(repo.set_visible(Uuid::new_v4(), false).await?.is_none());

    Ok(())
}
