use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(uuid(Vehicles::Id).primary_key())
                    .col(string_uniq(Vehicles::Code))
                    .col(string(Vehicles::Brand))
                    .col(string(Vehicles::Model))
                    .col(integer(Vehicles::Year))
                    .col(string(Vehicles::VehicleType))
                    .col(json_binary(Vehicles::Colors))
                    .col(json_binary(Vehicles::Locations))
                    .col(double(Vehicles::PricePerDay))
                    .col(boolean(Vehicles::Availability).default(true))
                    .col(boolean(Vehicles::Electric).default(false))
                    .col(string_null(Vehicles::ImageUrl))
                    .col(integer(Vehicles::Seats))
                    .col(integer(Vehicles::Luggage))
                    .col(integer_null(Vehicles::Horsepower))
                    .col(integer_null(Vehicles::Ps))
                    .col(string_null(Vehicles::Consumption))
                    .col(string_null(Vehicles::Fuel))
                    .col(string_null(Vehicles::GearType))
                    .col(boolean(Vehicles::Featured).default(false))
                    .col(double_null(Vehicles::Rating))
                    .col(double_null(Vehicles::Discount))
                    .col(
                        timestamp_with_time_zone(Vehicles::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicles {
    Table,
    Id,
    Code,
    Brand,
    Model,
    Year,
    VehicleType,
    Colors,
    Locations,
    PricePerDay,
    Availability,
    Electric,
    ImageUrl,
    Seats,
    Luggage,
    Horsepower,
    Ps,
    Consumption,
    Fuel,
    GearType,
    Featured,
    Rating,
    Discount,
    CreatedAt,
}
