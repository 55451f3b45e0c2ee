use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260412_000001_create_user_table::User,
    m20260412_000002_create_business_table::Business,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(uuid(Favorite::Id).primary_key())
                    .col(uuid(Favorite::UserId))
                    .col(uuid(Favorite::BusinessId))
                    .col(
                        timestamp(Favorite::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_user_id")
                            .from(Favorite::Table, Favorite::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_business_id")
                            .from(Favorite::Table, Favorite::BusinessId)
                            .to(Business::Table, Business::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_favorite_user_business")
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .col(Favorite::BusinessId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Favorite {
    Table,
    Id,
    UserId,
    BusinessId,
    CreatedAt,
}
