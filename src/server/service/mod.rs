//! Business logic services orchestrating controllers and the data layer.

pub mod auth;
pub mod booking;
pub mod mailer;
pub mod review;
pub mod token;
pub mod vehicle;
