mod booking;
mod location;
mod password_reset;
mod review;
mod user;
mod vehicle;
