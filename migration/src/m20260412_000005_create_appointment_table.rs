use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260412_000001_create_user_table::User,
    m20260412_000002_create_business_table::Business,
    m20260412_000004_create_service_table::Service,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(uuid(Appointment::Id).primary_key())
                    .col(uuid(Appointment::BusinessId))
                    .col(uuid(Appointment::ServiceId))
                    .col(uuid(Appointment::CustomerId))
                    .col(string_len(Appointment::Status, 16).default("pending"))
                    .col(timestamp(Appointment::Start))
                    .col(timestamp(Appointment::End))
                    .col(integer(Appointment::BufferMinutes).default(0))
                    .col(text(Appointment::Notes).default(""))
                    .col(string(Appointment::GoogleEventId).default(""))
                    .col(
                        timestamp(Appointment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Appointment::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Appointment::ConfirmedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_business_id")
                            .from(Appointment::Table, Appointment::BusinessId)
                            .to(Business::Table, Business::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_service_id")
                            .from(Appointment::Table, Appointment::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_customer_id")
                            .from(Appointment::Table, Appointment::CustomerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_business_start")
                    .table(Appointment::Table)
                    .col(Appointment::BusinessId)
                    .col(Appointment::Start)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_customer_start")
                    .table(Appointment::Table)
                    .col(Appointment::CustomerId)
                    .col(Appointment::Start)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Appointment {
    Table,
    Id,
    BusinessId,
    ServiceId,
    CustomerId,
    Status,
    Start,
    End,
    BufferMinutes,
    Notes,
    GoogleEventId,
    CreatedAt,
    UpdatedAt,
    ConfirmedAt,
}
