use super::*;

/// Tests deleting a job with skills.
///
/// Expected: Ok(true) and the job is gone
#[tokio::test]
async fn deletes_job_and_skills() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hirer = factory::user::create_user(db).await?;
    let location = factory::location::create_location(db).await?;
    let job = factory::job::JobFactory::new(db, location.uid, hirer.uid)
        .skills(&["Rust"])
        .build()
        .await?;

    let repo = JobRepository::new(db);

    assert!(repo.delete(job.uid).await?);
    assert!(!repo.delete(job.uid).await?);

    Ok(())
}
