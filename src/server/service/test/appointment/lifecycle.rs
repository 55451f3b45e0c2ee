use super::*;

/// Tests that a customer can cancel an upcoming appointment.
#[tokio::test]
async fn customer_cancels_upcoming_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;
    let appointment = factory::appointment::AppointmentFactory::new(
        db,
        business.id,
        service.id,
        customer.id,
    )
    .start(Utc::now() + Duration::days(2))
    .build()
    .await?;

    let cancelled = AppointmentService::new(db)
        .cancel_as_customer(appointment.id, customer.id)
        .await
        .unwrap();

    assert_eq!(cancelled.status, entity::appointment::Status::Cancelled);

    Ok(())
}

/// Tests that a customer cannot cancel an appointment whose start has
/// passed.
#[tokio::test]
async fn customer_cannot_cancel_past_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;
    let appointment = factory::appointment::AppointmentFactory::new(
        db,
        business.id,
        service.id,
        customer.id,
    )
    .start(Utc::now() - Duration::days(1))
    .build()
    .await?;

    let result = AppointmentService::new(db)
        .cancel_as_customer(appointment.id, customer.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that double-cancellation is rejected.
#[tokio::test]
async fn cancelling_twice_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;
    let appointment = factory::appointment::AppointmentFactory::new(
        db,
        business.id,
        service.id,
        customer.id,
    )
    .start(Utc::now() + Duration::days(2))
    .build()
    .await?;

    let service_layer = AppointmentService::new(db);
    service_layer
        .cancel_as_customer(appointment.id, customer.id)
        .await
        .unwrap();
    let second = service_layer
        .cancel_as_customer(appointment.id, customer.id)
        .await;

    assert!(matches!(second, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that another customer's appointment is invisible to the cancel
/// path.
#[tokio::test]
async fn customer_cannot_cancel_foreign_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let appointment = factory::appointment::AppointmentFactory::new(
        db,
        business.id,
        service.id,
        customer.id,
    )
    .start(Utc::now() + Duration::days(2))
    .build()
    .await?;

    let result = AppointmentService::new(db)
        .cancel_as_customer(appointment.id, stranger.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that the owner may cancel even past appointments.
#[tokio::test]
async fn owner_cancels_past_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;
    let appointment = factory::appointment::AppointmentFactory::new(
        db,
        business.id,
        service.id,
        customer.id,
    )
    .start(Utc::now() - Duration::days(1))
    .build()
    .await?;

    let cancelled = AppointmentService::new(db)
        .cancel_as_owner(&business, appointment.id)
        .await
        .unwrap();

    assert_eq!(cancelled.status, entity::appointment::Status::Cancelled);

    Ok(())
}

/// Tests the owner confirmation transition.
///
/// Expected: pending -> confirmed stamps confirmed_at; confirming a
/// cancelled appointment is rejected.
#[tokio::test]
async fn owner_confirms_pending_appointment() -> Result<(), DbErr> {
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

    let service_layer = AppointmentService::new(db);
    let confirmed = service_layer
        .confirm_as_owner(&business, appointment.id)
        .await
        .unwrap();

    assert_eq!(confirmed.status, entity::appointment::Status::Confirmed);
    assert!(confirmed.confirmed_at.is_some());

    let cancelled = service_layer
        .cancel_as_owner(&business, confirmed.id)
        .await
        .unwrap();
    let reconfirm = service_layer
        .confirm_as_owner(&business, cancelled.id)
        .await;

    assert!(matches!(reconfirm, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that cancelling frees the slot for the availability walk again.
#[tokio::test]
async fn cancelled_slot_becomes_available_again() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;

    let date = next_monday();
    let appointment = factory::appointment::AppointmentFactory::new(
        db,
        business.id,
        service.id,
        customer.id,
    )
    .start(warsaw_instant(date, 11, 0))
    .build()
    .await?;

    let availability = AvailabilityService::new(db);
    let before = format_time_list(
        &availability
            .daily_availability(&business, &service, date)
            .await?,
    );
    assert!(!before.contains(&"11:00".to_string()));

    AppointmentService::new(db)
        .cancel_as_customer(appointment.id, customer.id)
        .await
        .unwrap();

    let after = format_time_list(
        &availability
            .daily_availability(&business, &service, date)
            .await?,
    );
    assert!(after.contains(&"11:00".to_string()));

    Ok(())
}
