use sea_orm_migration::{prelude::*, schema::*};

use super::m20260412_000002_create_business_table::Business;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OpeningHour::Table)
                    .if_not_exists()
                    .col(uuid(OpeningHour::Id).primary_key())
                    .col(uuid(OpeningHour::BusinessId))
                    .col(integer(OpeningHour::DayOfWeek))
                    .col(boolean(OpeningHour::IsClosed).default(false))
                    .col(time_null(OpeningHour::OpenTime))
                    .col(time_null(OpeningHour::CloseTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_opening_hour_business_id")
                            .from(OpeningHour::Table, OpeningHour::BusinessId)
                            .to(Business::Table, Business::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per weekday per business.
        manager
            .create_index(
                Index::create()
                    .name("idx_opening_hour_business_day")
                    .table(OpeningHour::Table)
                    .col(OpeningHour::BusinessId)
                    .col(OpeningHour::DayOfWeek)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OpeningHour::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OpeningHour {
    Table,
    Id,
    BusinessId,
    DayOfWeek,
    IsClosed,
    OpenTime,
    CloseTime,
}
