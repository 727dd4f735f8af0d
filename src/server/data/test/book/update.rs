use super::*;

/// Tests a partial update changes only the provided fields.
///
/// Expected: Ok(Some) with new title and page count, other fields unchanged
#[tokio::test]
async fn updates_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, book) = factory::helpers::create_book_with_owner(db).await?;

    let repo = BookRepository::new(db);
    let updated = repo
        .update(
            book.uid,
            UpdateBookParam {
                title: Some("Dune Messiah".to_string()),
                page_count: Some(256),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Dune Messiah");
    assert_eq!(updated.page_count, 256);
    assert_eq!(updated.author, book.author);
    assert_eq!(updated.language, book.language);
    assert!(updated.updated_at >= book.updated_at);

    Ok(())
}

/// Tests correcting a book's publication date.
///
/// Expected: Ok(Some) with the new date and the title unchanged
#[tokio::test]
async fn updates_published_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, book) = factory::helpers::create_book_with_owner(db).await?;
    let corrected = NaiveDate::from_ymd_opt(1966, 2, 14).unwrap();

    let repo = BookRepository::new(db);
    let updated = repo
        .update(
            book.uid,
            UpdateBookParam {
                published_date: Some(corrected),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.published_date, corrected);
    assert_eq!(updated.title, book.title);

    Ok(())
}

/// Tests updating a missing book.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let result = repo.update(Uuid::new_v4(), UpdateBookParam::default()).await?;

    assert!(result.is_none());

    Ok(())
}
