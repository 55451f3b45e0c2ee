use super::*;

/// Tests the canonical example: open 09:00-17:00, 60-minute service, no
/// buffer, no bookings.
///
/// Expected: hourly slots 09:00 through 16:00.
#[tokio::test]
async fn open_day_without_bookings_yields_hourly_slots() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, _) = factory::helpers::create_booking_dependencies(db).await?;

    let availability = AvailabilityService::new(db);
    let slots = availability
        .daily_availability(&business, &service, next_monday())
        .await?;

    let formatted = format_time_list(&slots);
    assert_eq!(
        formatted,
        vec![
            "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00"
        ]
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>()
    );

    Ok(())
}

/// Tests that an existing appointment (with its buffer) removes the
/// covered slots but nothing else.
#[tokio::test]
async fn excludes_booked_slot_and_its_buffer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;

    let date = next_monday();
    // 11:00-12:00 appointment with a 30-minute buffer occupies until 12:30.
    factory::appointment::AppointmentFactory::new(db, business.id, service.id, customer.id)
        .start(warsaw_instant(date, 11, 0))
        .duration_minutes(60)
        .buffer_minutes(30)
        .build()
        .await?;

    let availability = AvailabilityService::new(db);
    let slots = format_time_list(
        &availability
            .daily_availability(&business, &service, date)
            .await?,
    );

    assert!(!slots.contains(&"11:00".to_string()));
    assert!(!slots.contains(&"12:00".to_string()));
    assert!(slots.contains(&"10:00".to_string()));
    assert!(slots.contains(&"13:00".to_string()));

    Ok(())
}

/// Tests that cancelled appointments do not block slots.
#[tokio::test]
async fn cancelled_appointments_do_not_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;

    let date = next_monday();
    factory::appointment::AppointmentFactory::new(db, business.id, service.id, customer.id)
        .start(warsaw_instant(date, 11, 0))
        .status(entity::appointment::Status::Cancelled)
        .build()
        .await?;

    let availability = AvailabilityService::new(db);
    let slots = format_time_list(
        &availability
            .daily_availability(&business, &service, date)
            .await?,
    );

    assert!(slots.contains(&"11:00".to_string()));

    Ok(())
}

/// Tests that a closed weekday yields no slots.
#[tokio::test]
async fn closed_day_yields_no_slots() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, _) = factory::helpers::create_booking_dependencies(db).await?;

    // Factory businesses are closed on Sunday.
    let sunday = next_monday() + Duration::days(6);

    let availability = AvailabilityService::new(db);
    let slots = availability
        .daily_availability(&business, &service, sunday)
        .await?;

    assert!(slots.is_empty());

    Ok(())
}

/// Tests that every listed slot passes the single-slot check at the same
/// point in time.
#[tokio::test]
async fn listed_slots_agree_with_single_slot_check() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;

    let date = next_monday();
    factory::appointment::AppointmentFactory::new(db, business.id, service.id, customer.id)
        .start(warsaw_instant(date, 13, 0))
        .build()
        .await?;

    let availability = AvailabilityService::new(db);
    let slots = availability
        .daily_availability(&business, &service, date)
        .await?;
    assert!(!slots.is_empty());

    let tz = resolve_timezone(&business);
    for slot in slots {
        let start_local = local_datetime(date, slot, tz).unwrap();
        assert!(
            availability
                .is_slot_available(&business, &service, start_local)
                .await?,
            "slot {} listed but not individually available",
            slot
        );
    }

    // And the booked start itself fails the check.
    let booked = local_datetime(date, hm(13, 0), tz).unwrap();
    assert!(!availability.is_slot_available(&business, &service, booked).await?);

    Ok(())
}

/// Tests idempotence: two computations with no intervening writes yield
/// identical ordered output.
#[tokio::test]
async fn repeated_computation_is_identical() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;

    let date = next_monday();
    factory::appointment::AppointmentFactory::new(db, business.id, service.id, customer.id)
        .start(warsaw_instant(date, 10, 0))
        .build()
        .await?;

    let availability = AvailabilityService::new(db);
    let first = availability
        .daily_availability(&business, &service, date)
        .await?;
    let second = availability
        .daily_availability(&business, &service, date)
        .await?;

    assert_eq!(first, second);

    Ok(())
}

/// Tests that an unresolvable business timezone degrades to the default
/// zone instead of failing the request.
#[tokio::test]
async fn unknown_timezone_still_produces_slots() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let business = factory::business::BusinessFactory::new(db, owner.id)
        .timezone("Not/AZone")
        .build()
        .await?;
    factory::opening_hour::create_open_day(db, business.id, 0, hm(9, 0), hm(17, 0)).await?;
    let service = factory::service::create_service(db, business.id).await?;

    let availability = AvailabilityService::new(db);
    let slots = availability
        .daily_availability(&business, &service, next_monday())
        .await?;

    assert_eq!(slots.len(), 8);

    Ok(())
}
