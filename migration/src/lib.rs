pub use sea_orm_migration::prelude::*;

mod m20260412_000001_create_user_table;
mod m20260412_000002_create_business_table;
mod m20260412_000003_create_opening_hour_table;
mod m20260412_000004_create_service_table;
mod m20260412_000005_create_appointment_table;
mod m20260412_000006_create_favorite_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260412_000001_create_user_table::Migration),
            Box::new(m20260412_000002_create_business_table::Migration),
            Box::new(m20260412_000003_create_opening_hour_table::Migration),
            Box::new(m20260412_000004_create_service_table::Migration),
            Box::new(m20260412_000005_create_appointment_table::Migration),
            Box::new(m20260412_000006_create_favorite_table::Migration),
        ]
    }
}
