use super::*;

/// Tests that the overlap query returns appointments intersecting the
/// range and excludes cancelled ones.
///
/// Expected: only the non-cancelled appointment inside the range is found.
#[tokio::test]
async fn finds_active_appointments_in_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;

    let inside = factory::appointment::AppointmentFactory::new(db, business.id, service.id, customer.id)
        .start(base_time())
        .build()
        .await?;
    factory::appointment::AppointmentFactory::new(db, business.id, service.id, customer.id)
        .start(base_time())
        .status(entity::appointment::Status::Cancelled)
        .build()
        .await?;

    let repo = AppointmentRepository::new(db);
    let found = repo
        .overlapping(
            business.id,
            base_time() - Duration::hours(1),
            base_time() + Duration::hours(2),
        )
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, inside.id);

    Ok(())
}

/// Tests the half-open boundary semantics of the range query.
///
/// An appointment ending exactly at the range start, or starting exactly
/// at the range end, does not overlap.
#[tokio::test]
async fn touching_appointments_are_excluded() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;

    // Ends exactly at range start.
    factory::appointment::AppointmentFactory::new(db, business.id, service.id, customer.id)
        .start(base_time() - Duration::hours(1))
        .duration_minutes(60)
        .build()
        .await?;
    // Starts exactly at range end.
    factory::appointment::AppointmentFactory::new(db, business.id, service.id, customer.id)
        .start(base_time() + Duration::hours(2))
        .duration_minutes(60)
        .build()
        .await?;

    let repo = AppointmentRepository::new(db);
    let found = repo
        .overlapping(
            business.id,
            base_time(),
            base_time() + Duration::hours(2),
        )
        .await?;

    assert!(found.is_empty());

    Ok(())
}

/// Tests that appointments of other businesses are invisible to the query.
#[tokio::test]
async fn scopes_to_the_business() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, _, _) = factory::helpers::create_booking_dependencies(db).await?;
    let (_, other_business, other_service, other_customer) =
        factory::helpers::create_booking_dependencies(db).await?;

    factory::appointment::AppointmentFactory::new(
        db,
        other_business.id,
        other_service.id,
        other_customer.id,
    )
    .start(base_time())
    .build()
    .await?;

    let repo = AppointmentRepository::new(db);
    let found = repo
        .overlapping(
            business.id,
            base_time() - Duration::hours(1),
            base_time() + Duration::hours(2),
        )
        .await?;

    assert!(found.is_empty());

    Ok(())
}
