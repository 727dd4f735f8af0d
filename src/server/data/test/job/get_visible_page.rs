use super::*;

use test_utils::factory::job::JobFactory;

/// Tests hidden jobs are excluded from the listing.
///
/// Expected: Ok with only the visible job counted
#[tokio::test]
async fn excludes_hidden_jobs() -> Result<(), AppError> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hirer, location, visible) = factory::helpers::create_job_with_dependencies(db).await?;
    JobFactory::new(db, location.uid, hirer.uid)
        .visible(false)
        .build()
        .await?;

    let repo = JobRepository::new(db);
    let (jobs, total) = repo.get_visible_page(&filter(1, 10)).await?;

    assert_eq!(total, 1);
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].uid, visible.uid);

    Ok(())
}

/// Tests filtering by contract type and listing date.
///
/// Expected: Ok with only jobs of the requested type listed on or after the date
#[tokio::test]
async fn filters_by_contract_type_and_date() -> Result<(), AppError> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hirer = factory::user::create_user(db).await?;
    let location = factory::location::create_location(db).await?;
    let now = Utc::now();

    let recent = JobFactory::new(db, location.uid, hirer.uid)
        .contract_type("permanent")
        .build()
        .await?;
    JobFactory::new(db, location.uid, hirer.uid)
        .contract_type("permanent")
        .date_listed(now - Duration::days(10))
        .build()
        .await?;
    JobFactory::new(db, location.uid, hirer.uid)
        .contract_type("contract")
        .build()
        .await?;

    let repo = JobRepository::new(db);
    let mut query = filter(1, 10);
    query.contract_type = Some(ContractType::Permanent);
    query.date_since_posted = Some((now - Duration::days(2)).date_naive());

    let (jobs, total) = repo.get_visible_page(&query).await?;

    assert_eq!(total, 1);
    assert_eq!(jobs[0].uid, recent.uid);

    Ok(())
}

/// Tests sorting by rate ascending.
///
/// Expected: Ok with jobs ordered from lowest to highest rate
#[tokio::test]
async fn sorts_by_rate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hirer = factory::user::create_user(db).await?;
    let location = factory::location::create_location(db).await?;
    for amount in [300.0, 100.0, 200.0] {
        JobFactory::new(db, location.uid, hirer.uid)
            .rate_amount(amount)
            .build()
            .await?;
    }

    let repo = JobRepository::new(db);
    let mut query = filter(1, 10);
    query.sort = JobSort::Rate;

    let (jobs, _) = repo.get_visible_page(&query).await?;
    let rates: Vec<f64> = jobs.iter().map(|j| j.rate.amount).collect();

    assert_eq!(rates, vec![100.0, 200.0, 300.0]);

    Ok(())
}

/// Tests paging through the listing by date posted.
///
/// Expected: Ok with the requested page slice and the full match count
#[tokio::test]
async fn pages_by_date_posted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hirer = factory::user::create_user(db).await?;
    let location = factory::location::create_location(db).await?;
    let now = Utc::now();

    let mut created = Vec::new();
    for days_ago in [4, 3, 2, 1, 0] {
        let job = JobFactory::new(db, location.uid, hirer.uid)
            .date_listed(now - Duration::days(days_ago))
            .skills(&["Python"])
            .build()
            .await?;
        created.push(job.uid);
    }

    let repo = JobRepository::new(db);
    let (jobs, total) = repo.get_visible_page(&filter(2, 2)).await?;

    assert_eq!(total, 5);
    assert_eq!(
        jobs.iter().map(|j| j.uid).collect::<Vec<_>>(),
        created[2..4].to_vec()
    );
    assert!(jobs.iter().all(|j| j.skills == vec!["Python"]));

    let (past_end, _) = repo.get_visible_page(&filter(9, 2)).await?;
    assert!(past_end.is_empty());

    Ok(())
}
