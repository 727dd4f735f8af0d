use super::*;

/// Tests creating a location.
///
/// Expected: Ok with the created location, readable by uid
#[tokio::test]
async fn creates_location() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LocationRepository::new(db);
    let location = repo
        .create(CreateLocationParam {
            city: "Austin".to_string(),
            state: Some("TX".to_string()),
            country: "USA".to_string(),
        })
        .await?;

    assert_eq!(location.state.as_deref(), Some("TX"));
    assert_eq!(repo.find_by_uid(location.uid).await?, Some(location));

    Ok(())
}
