use sea_orm_migration::{prelude::*, schema::*};

use super::m20250513_000005_create_booking_table::Bookings;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(uuid(Reviews::Id).primary_key())
                    .col(string(Reviews::VehicleCode))
                    .col(string(Reviews::ReviewerName))
                    .col(text(Reviews::Body))
                    .col(small_integer(Reviews::Stars))
                    .col(date(Reviews::Date))
                    .col(uuid_null(Reviews::BookingId).unique_key())
                    .col(uuid_null(Reviews::UserId))
                    .col(
                        timestamp_with_time_zone(Reviews::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_booking_id")
                            .from(Reviews::Table, Reviews::BookingId)
                            .to(Bookings::Table, Bookings::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_review_vehicle_code")
                    .table(Reviews::Table)
                    .col(Reviews::VehicleCode)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reviews {
    Table,
    Id,
    VehicleCode,
    ReviewerName,
    Body,
    Stars,
    Date,
    BookingId,
    UserId,
    CreatedAt,
}
