use super::*;

/// Tests inserting a pending appointment with a buffer snapshot.
///
/// Expected: row created with status pending, the given times and buffer,
/// and no confirmation timestamp.
#[tokio::test]
async fn inserts_pending_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;

    let start = base_time();
    let end = start + Duration::minutes(60);

    let repo = AppointmentRepository::new(db);
    let appointment = repo
        .insert(InsertAppointmentParams {
            business_id: business.id,
            service_id: service.id,
            customer_id: customer.id,
            start,
            end,
            buffer_minutes: 15,
            notes: "First visit".to_string(),
        })
        .await?;

    assert_eq!(appointment.status, entity::appointment::Status::Pending);
    assert_eq!(appointment.start, start);
    assert_eq!(appointment.end, end);
    assert_eq!(appointment.buffer_minutes, 15);
    assert_eq!(appointment.notes, "First visit");
    assert!(appointment.confirmed_at.is_none());
    assert!(appointment.google_event_id.is_empty());

    Ok(())
}

/// Tests foreign key constraint on business_id.
///
/// Expected: Err(DbErr) when the referenced business does not exist.
#[tokio::test]
async fn fails_for_nonexistent_business() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;

    let start = base_time();
    let repo = AppointmentRepository::new(db);
    let result = repo
        .insert(InsertAppointmentParams {
            business_id: uuid::Uuid::new_v4(),
            service_id: service.id,
            customer_id: customer.id,
            start,
            end: start + Duration::minutes(60),
            buffer_minutes: 0,
            notes: String::new(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
