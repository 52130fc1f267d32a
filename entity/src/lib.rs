//! SeaORM entity models for the rental marketplace schema.

pub mod prelude;

pub mod booking;
pub mod favorite;
pub mod location;
pub mod password_reset_token;
pub mod profile;
pub mod review;
pub mod user;
pub mod vehicle;
