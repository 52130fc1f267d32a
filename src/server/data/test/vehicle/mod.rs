use crate::server::{data::vehicle::VehicleRepository, model::vehicle::VehicleFilter};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod search;
mod update_locations;
