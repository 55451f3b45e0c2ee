use sea_orm_migration::{prelude::*, schema::*};

use super::m20260412_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Business::Table)
                    .if_not_exists()
                    .col(uuid(Business::Id).primary_key())
                    .col(uuid(Business::OwnerId))
                    .col(string(Business::Name))
                    .col(string_uniq(Business::Slug))
                    .col(string_len(Business::Category, 32))
                    .col(text(Business::Description).default(""))
                    .col(string(Business::Email).default(""))
                    .col(string(Business::PhoneNumber).default(""))
                    .col(string(Business::WebsiteUrl).default(""))
                    .col(string(Business::Timezone).default("Europe/Warsaw"))
                    .col(string(Business::AddressLine1))
                    .col(string(Business::AddressLine2).default(""))
                    .col(string(Business::City))
                    .col(string(Business::PostalCode))
                    .col(string(Business::Country).default("Poland"))
                    .col(string(Business::GoogleCalendarId).default(""))
                    .col(
                        timestamp(Business::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Business::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_business_owner_id")
                            .from(Business::Table, Business::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Business::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Business {
    Table,
    Id,
    OwnerId,
    Name,
    Slug,
    Category,
    Description,
    Email,
    PhoneNumber,
    WebsiteUrl,
    Timezone,
    AddressLine1,
    AddressLine2,
    City,
    PostalCode,
    Country,
    GoogleCalendarId,
    CreatedAt,
    UpdatedAt,
}
