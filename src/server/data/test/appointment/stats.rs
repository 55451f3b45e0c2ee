use super::*;

/// Tests the owner-dashboard aggregate counts.
///
/// Seeds one upcoming pending, one confirmed-in-the-past and one cancelled
/// appointment.
#[tokio::test]
async fn counts_by_status_and_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, business, service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;

    let now = Utc::now();
    factory::appointment::AppointmentFactory::new(db, business.id, service.id, customer.id)
        .start(now + Duration::days(1))
        .build()
        .await?;
    factory::appointment::AppointmentFactory::new(db, business.id, service.id, customer.id)
        .start(now - Duration::days(1))
        .status(entity::appointment::Status::Confirmed)
        .build()
        .await?;
    factory::appointment::AppointmentFactory::new(db, business.id, service.id, customer.id)
        .start(now + Duration::days(3))
        .status(entity::appointment::Status::Cancelled)
        .build()
        .await?;

    let repo = AppointmentRepository::new(db);
    let stats = repo.stats(business.id, now).await?;

    assert_eq!(stats.total, 3);
    assert_eq!(stats.upcoming, 1);
    assert_eq!(stats.confirmed, 1);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.cancelled, 1);
    assert_eq!(stats.last_30_days, 3);

    Ok(())
}
