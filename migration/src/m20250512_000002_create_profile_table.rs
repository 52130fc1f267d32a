use sea_orm_migration::{prelude::*, schema::*};

use super::m20250512_000001_create_user_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(uuid(Profiles::Id).primary_key())
                    .col(string(Profiles::Email))
                    .col(string_null(Profiles::FullName))
                    .col(string_null(Profiles::LastName))
                    .col(string_null(Profiles::PhoneNumber))
                    .col(string_null(Profiles::AvatarUrl))
                    .col(string_null(Profiles::Address))
                    .col(string_null(Profiles::CountryCode))
                    .col(string_null(Profiles::Country))
                    .col(string_null(Profiles::ZipCode))
                    .col(string_null(Profiles::City))
                    .col(string_null(Profiles::State))
                    .col(
                        timestamp_with_time_zone(Profiles::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Profiles::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_user_id")
                            .from(Profiles::Table, Profiles::Id)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Profiles {
    Table,
    Id,
    Email,
    FullName,
    LastName,
    PhoneNumber,
    AvatarUrl,
    Address,
    CountryCode,
    Country,
    ZipCode,
    City,
    State,
    CreatedAt,
    UpdatedAt,
}
