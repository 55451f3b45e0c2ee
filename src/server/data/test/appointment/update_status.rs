use super::*;

/// Tests the pending -> confirmed transition.
///
/// Expected: status changes and `confirmed_at` is stamped.
#[tokio::test]
async fn confirming_stamps_confirmed_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;
    let appointment =
        factory::appointment::create_appointment(db, business.id, service.id, customer.id).await?;

    let repo = AppointmentRepository::new(db);
    let confirmed = repo
        .update_status(appointment, entity::appointment::Status::Confirmed)
        .await?;

    assert_eq!(confirmed.status, entity::appointment::Status::Confirmed);
    assert!(confirmed.confirmed_at.is_some());

    Ok(())
}

/// Tests that cancelling preserves an earlier confirmation timestamp.
#[tokio::test]
async fn cancelling_keeps_confirmed_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;
    let appointment =
        factory::appointment::create_appointment(db, business.id, service.id, customer.id).await?;

    let repo = AppointmentRepository::new(db);
    let confirmed = repo
        .update_status(appointment, entity::appointment::Status::Confirmed)
        .await?;
    let confirmed_at = confirmed.confirmed_at;

    let cancelled = repo
        .update_status(confirmed, entity::appointment::Status::Cancelled)
        .await?;

    assert_eq!(cancelled.status, entity::appointment::Status::Cancelled);
    assert_eq!(cancelled.confirmed_at, confirmed_at);

    Ok(())
}

/// Tests the customer listing filters.
///
/// Expected: status filter and upcoming/past filters narrow the result.
#[tokio::test]
async fn customer_listing_applies_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;

    let now = Utc::now();
    let upcoming = factory::appointment::AppointmentFactory::new(
        db,
        business.id,
        service.id,
        customer.id,
    )
    .start(now + Duration::days(2))
    .build()
    .await?;
    let past = factory::appointment::AppointmentFactory::new(
        db,
        business.id,
        service.id,
        customer.id,
    )
    .start(now - Duration::days(2))
    .status(entity::appointment::Status::Cancelled)
    .build()
    .await?;

    let repo = AppointmentRepository::new(db);

    let all = repo
        .list_for_customer(customer.id, AppointmentListFilter::default(), now)
        .await?;
    assert_eq!(all.len(), 2);
    // Newest start first.
    assert_eq!(all[0].id, upcoming.id);

    let cancelled_only = repo
        .list_for_customer(
            customer.id,
            AppointmentListFilter {
                status: Some(entity::appointment::Status::Cancelled),
                time: None,
            },
            now,
        )
        .await?;
    assert_eq!(cancelled_only.len(), 1);
    assert_eq!(cancelled_only[0].id, past.id);

    let upcoming_only = repo
        .list_for_customer(
            customer.id,
            AppointmentListFilter {
                status: None,
                time: Some(crate::server::model::appointment::TimeFilter::Upcoming),
            },
            now,
        )
        .await?;
    assert_eq!(upcoming_only.len(), 1);
    assert_eq!(upcoming_only[0].id, upcoming.id);

    Ok(())
}
