use super::*;

/// Tests booking a free slot.
///
/// Expected: pending appointment with end = start + duration and the
/// service buffer snapshotted, stored in UTC.
#[tokio::test]
async fn books_free_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, _, customer) = factory::helpers::create_booking_dependencies(db).await?;
    let service = factory::service::ServiceFactory::new(db, business.id)
        .duration_minutes(60)
        .buffer_minutes(15)
        .build()
        .await?;

    let date = next_monday();
    let locks = BookingLocks::new();
    let booking = BookingService::new(db, &locks, disabled_calendar(db));
    let appointment = booking
        .book(&business, params(service.id, customer.id, date, 10, 0))
        .await
        .unwrap();

    assert_eq!(appointment.status, entity::appointment::Status::Pending);
    assert_eq!(appointment.start, warsaw_instant(date, 10, 0));
    assert_eq!(appointment.end, warsaw_instant(date, 11, 0));
    assert_eq!(appointment.buffer_minutes, 15);

    let stored = AppointmentRepository::new(db)
        .find_by_id(appointment.id)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that booking an already-taken start loses with SlotUnavailable
/// and writes nothing.
#[tokio::test]
async fn rejects_taken_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;
    let rival = factory::user::create_user(db).await?;

    let date = next_monday();
    let locks = BookingLocks::new();
    let booking = BookingService::new(db, &locks, disabled_calendar(db));

    booking
        .book(&business, params(service.id, customer.id, date, 10, 0))
        .await
        .unwrap();
    let result = booking
        .book(&business, params(service.id, rival.id, date, 10, 0))
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::SlotUnavailable))
    ));

    let day = AppointmentRepository::new(db)
        .overlapping(
            business.id,
            warsaw_instant(date, 0, 0),
            warsaw_instant(date, 23, 59),
        )
        .await?;
    assert_eq!(day.len(), 1);

    Ok(())
}

/// Tests that a partially overlapping start is also rejected.
#[tokio::test]
async fn rejects_overlapping_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;

    let date = next_monday();
    let locks = BookingLocks::new();
    let booking = BookingService::new(db, &locks, disabled_calendar(db));

    booking
        .book(&business, params(service.id, customer.id, date, 10, 0))
        .await
        .unwrap();
    let result = booking
        .book(&business, params(service.id, customer.id, date, 10, 30))
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::SlotUnavailable))
    ));

    Ok(())
}

/// Tests the closing-time boundary: a 60-minute service cannot start at
/// 16:30 against a 17:00 close, but 16:00 is the exact fit and books.
#[tokio::test]
async fn rejects_slot_exceeding_close() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;

    let date = next_monday();
    let locks = BookingLocks::new();
    let booking = BookingService::new(db, &locks, disabled_calendar(db));

    let result = booking
        .book(&business, params(service.id, customer.id, date, 16, 30))
        .await;
    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::InvalidWindow))
    ));

    let exact_fit = booking
        .book(&business, params(service.id, customer.id, date, 16, 0))
        .await;
    assert!(exact_fit.is_ok());

    Ok(())
}

/// Tests that a closed weekday rejects with InvalidWindow.
#[tokio::test]
async fn rejects_closed_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;

    let sunday = next_monday() + Duration::days(6);
    let locks = BookingLocks::new();
    let booking = BookingService::new(db, &locks, disabled_calendar(db));

    let result = booking
        .book(&business, params(service.id, customer.id, sunday, 10, 0))
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::InvalidWindow))
    ));

    Ok(())
}

/// Tests that an elapsed start is rejected before any window logic runs.
#[tokio::test]
async fn rejects_past_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;

    let yesterday = Utc::now().date_naive() - Duration::days(1);
    let locks = BookingLocks::new();
    let booking = BookingService::new(db, &locks, disabled_calendar(db));

    let result = booking
        .book(&business, params(service.id, customer.id, yesterday, 10, 0))
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::PastSlot))
    ));

    Ok(())
}

/// Tests that a deactivated service cannot be booked.
#[tokio::test]
async fn rejects_inactive_service() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, _, customer) = factory::helpers::create_booking_dependencies(db).await?;
    let inactive = factory::service::ServiceFactory::new(db, business.id)
        .active(false)
        .build()
        .await?;

    let locks = BookingLocks::new();
    let booking = BookingService::new(db, &locks, disabled_calendar(db));

    let result = booking
        .book(
            &business,
            params(inactive.id, customer.id, next_monday(), 10, 0),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::ServiceInactive))
    ));

    Ok(())
}

/// Tests the race: two concurrent bookings for the same slot.
///
/// Expected: exactly one succeeds, the loser observes SlotUnavailable, and
/// the stored intervals never overlap.
#[tokio::test]
async fn concurrent_bookings_have_one_winner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;
    let rival = factory::user::create_user(db).await?;

    let date = next_monday();
    let locks = std::sync::Arc::new(BookingLocks::new());
    let calendar = disabled_calendar(db);

    let db_a = db.clone();
    let db_b = db.clone();
    let business_a = business.clone();
    let business_b = business.clone();
    let params_a = params(service.id, customer.id, date, 10, 0);
    let params_b = params(service.id, rival.id, date, 10, 0);
    let (locks_a, locks_b) = (locks.clone(), locks.clone());
    let (calendar_a, calendar_b) = (calendar.clone(), calendar.clone());

    let (first, second) = tokio::join!(
        async move {
            BookingService::new(&db_a, &locks_a, calendar_a)
                .book(&business_a, params_a)
                .await
        },
        async move {
            BookingService::new(&db_b, &locks_b, calendar_b)
                .book(&business_b, params_b)
                .await
        },
    );

    let outcomes = [first, second];
    let winners = outcomes.iter().filter(|result| result.is_ok()).count();
    assert_eq!(winners, 1);
    assert!(outcomes.iter().any(|result| matches!(
        result,
        Err(AppError::BookingErr(BookingError::SlotUnavailable))
    )));

    // The non-overlap invariant holds on what was actually stored.
    let day = AppointmentRepository::new(db)
        .overlapping(
            business.id,
            warsaw_instant(date, 0, 0),
            warsaw_instant(date, 23, 59),
        )
        .await?;
    assert_eq!(day.len(), 1);

    Ok(())
}

/// Tests that the buffer stored on the appointment is a snapshot: editing
/// the service afterwards does not move the committed reservation.
#[tokio::test]
async fn buffer_snapshot_survives_service_edits() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, _, customer) = factory::helpers::create_booking_dependencies(db).await?;
    let service = factory::service::ServiceFactory::new(db, business.id)
        .duration_minutes(60)
        .buffer_minutes(30)
        .build()
        .await?;

    let date = next_monday();
    let locks = BookingLocks::new();
    let booking = BookingService::new(db, &locks, disabled_calendar(db));
    let appointment = booking
        .book(&business, params(service.id, customer.id, date, 10, 0))
        .await
        .unwrap();
    assert_eq!(appointment.buffer_minutes, 30);

    // Drop the buffer on the service after the fact.
    crate::server::data::service::ServiceRepository::new(db)
        .update(
            service,
            crate::server::model::business::UpdateServiceParams {
                buffer_minutes: Some(0),
                ..Default::default()
            },
        )
        .await?;

    let stored = AppointmentRepository::new(db)
        .find_by_id(appointment.id)
        .await?
        .unwrap();
    assert_eq!(stored.buffer_minutes, 30);

    Ok(())
}
