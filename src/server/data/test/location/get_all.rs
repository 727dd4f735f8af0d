use super::*;

/// Tests locations are ordered by country, then city.
///
/// Expected: Ok with locations in country/city order
#[tokio::test]
async fn orders_by_country_then_city() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::location::create_location_in(db, "Warsaw", "Poland").await?;
    factory::location::create_location_in(db, "Krakow", "Poland").await?;
    factory::location::create_location_in(db, "Berlin", "Germany").await?;

    let repo = LocationRepository::new(db);
    let cities: Vec<_> = repo
        .get_all()
        .await?
        .into_iter()
        .map(|l| l.city)
        .collect();

    assert_eq!(cities, vec!["Berlin", "Krakow", "Warsaw"]);

    Ok(())
}
