use crate::server::data::review::ReviewRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod list;
