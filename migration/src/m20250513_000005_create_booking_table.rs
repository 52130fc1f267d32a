use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250512_000001_create_user_table::Users, m20250512_000003_create_vehicle_table::Vehicles,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(uuid(Bookings::Id).primary_key())
                    .col(uuid(Bookings::VehicleId))
                    .col(uuid(Bookings::UserId))
                    .col(string(Bookings::PickupLocation))
                    .col(string(Bookings::DropoffLocation))
                    .col(timestamp_with_time_zone(Bookings::PickupDate))
                    .col(timestamp_with_time_zone(Bookings::DropoffDate))
                    .col(double(Bookings::TotalPrice))
                    .col(string_len(Bookings::Status, 16))
                    .col(
                        timestamp_with_time_zone(Bookings::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Bookings::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_vehicle_id")
                            .from(Bookings::Table, Bookings::VehicleId)
                            .to(Vehicles::Table, Vehicles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user_id")
                            .from(Bookings::Table, Bookings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The sweep scans confirmed bookings by dropoff date.
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_status_dropoff")
                    .table(Bookings::Table)
                    .col(Bookings::Status)
                    .col(Bookings::DropoffDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bookings {
    Table,
    Id,
    VehicleId,
    UserId,
    PickupLocation,
    DropoffLocation,
    PickupDate,
    DropoffDate,
    TotalPrice,
    Status,
    CreatedAt,
    UpdatedAt,
}
