use super::*;

/// Tests the atomic weekly-schedule replacement.
///
/// Expected: old rows are gone, the new set is returned ordered by
/// weekday.
#[tokio::test]
async fn replaces_existing_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let business = factory::business::create_business(db, owner.id).await?;
    factory::opening_hour::create_week_hours(db, business.id, hm(9, 0), hm(17, 0)).await?;

    let repo = OpeningHourRepository::new(db);
    let replaced = repo
        .replace_week(
            business.id,
            vec![
                OpeningHourParams {
                    day_of_week: 0,
                    is_closed: false,
                    open_time: Some(hm(10, 0)),
                    close_time: Some(hm(18, 0)),
                },
                OpeningHourParams {
                    day_of_week: 6,
                    is_closed: true,
                    open_time: None,
                    close_time: None,
                },
            ],
        )
        .await?;

    assert_eq!(replaced.len(), 2);

    let listed = repo.list_for_business(business.id).await?;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].day_of_week, 0);
    assert_eq!(listed[0].open_time, Some(hm(10, 0)));
    assert_eq!(listed[1].day_of_week, 6);
    assert!(listed[1].is_closed);

    Ok(())
}

/// Tests replacement scoping: other businesses keep their schedules.
#[tokio::test]
async fn leaves_other_businesses_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let business = factory::business::create_business(db, owner.id).await?;
    let other = factory::business::create_business(db, owner.id).await?;
    factory::opening_hour::create_week_hours(db, business.id, hm(9, 0), hm(17, 0)).await?;
    factory::opening_hour::create_week_hours(db, other.id, hm(8, 0), hm(16, 0)).await?;

    let repo = OpeningHourRepository::new(db);
    repo.replace_week(business.id, Vec::new()).await?;

    assert!(repo.list_for_business(business.id).await?.is_empty());
    assert_eq!(repo.list_for_business(other.id).await?.len(), 7);

    Ok(())
}
