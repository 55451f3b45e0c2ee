//! Shared helper utilities for factory methods.

use chrono::NaiveTime;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique
/// identifying fields (emails, slugs) to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a business that is open Monday through Saturday 09:00-17:00.
///
/// # Arguments
/// - `db` - Database connection
/// - `owner_id` - ID of the owning user
///
/// # Returns
/// - `Ok(business)` - Business with six open-day rows attached
/// - `Err(DbErr)` - Database error during creation
pub async fn create_business_with_hours(
    db: &DatabaseConnection,
    owner_id: uuid::Uuid,
) -> Result<entity::business::Model, DbErr> {
    let business = crate::factory::business::create_business(db, owner_id).await?;
    let open = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    let close = NaiveTime::from_hms_opt(17, 0, 0).unwrap();

    for day in 0..6 {
        crate::factory::opening_hour::create_open_day(db, business.id, day, open, close).await?;
    }
    crate::factory::opening_hour::OpeningHourFactory::new(db, business.id, 6)
        .closed()
        .build()
        .await?;

    Ok(business)
}

/// Creates a complete bookable setup: owner, business with opening hours,
/// one active service, and a customer.
///
/// The business is open Monday-Saturday 09:00-17:00 with a 60-minute
/// zero-buffer service. Use the individual factories when a test needs
/// different hours or slot widths.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, business, service, customer))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::business::Model,
        entity::service::Model,
        entity::user::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::user::UserFactory::new(db)
        .business_owner(true)
        .build()
        .await?;
    let business = create_business_with_hours(db, owner.id).await?;
    let service = crate::factory::service::create_service(db, business.id).await?;
    let customer = crate::factory::user::create_user(db).await?;

    Ok((owner, business, service, customer))
}
