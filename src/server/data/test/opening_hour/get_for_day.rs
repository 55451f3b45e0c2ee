use super::*;

/// Tests the per-weekday lookup.
///
/// Expected: the configured row for the weekday, None for an unconfigured
/// weekday.
#[tokio::test]
async fn finds_row_for_configured_weekday() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let business = factory::business::create_business(db, owner.id).await?;
    factory::opening_hour::create_open_day(db, business.id, 0, hm(9, 0), hm(17, 0)).await?;

    let repo = OpeningHourRepository::new(db);

    let monday = repo.get_for_day(business.id, 0).await?;
    assert!(monday.is_some());
    let monday = monday.unwrap();
    assert_eq!(monday.open_time, Some(hm(9, 0)));
    assert_eq!(monday.close_time, Some(hm(17, 0)));

    let sunday = repo.get_for_day(business.id, 6).await?;
    assert!(sunday.is_none());

    Ok(())
}
