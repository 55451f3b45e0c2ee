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
                    .table(Service::Table)
                    .if_not_exists()
                    .col(uuid(Service::Id).primary_key())
                    .col(uuid(Service::BusinessId))
                    .col(string(Service::Name))
                    .col(text(Service::Description).default(""))
                    .col(integer(Service::DurationMinutes))
                    .col(integer(Service::BufferMinutes).default(0))
                    .col(double_null(Service::PriceAmount))
                    .col(string_len(Service::PriceCurrency, 3).default("PLN"))
                    .col(boolean(Service::IsActive).default(true))
                    .col(string(Service::Color).default(""))
                    .col(
                        timestamp(Service::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Service::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_business_id")
                            .from(Service::Table, Service::BusinessId)
                            .to(Business::Table, Business::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Service::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Service {
    Table,
    Id,
    BusinessId,
    Name,
    Description,
    DurationMinutes,
    BufferMinutes,
    PriceAmount,
    PriceCurrency,
    IsActive,
    Color,
    CreatedAt,
    UpdatedAt,
}
