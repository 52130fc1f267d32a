//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and convert
//! to domain models at the boundary where the caller doesn't need raw rows. All database
//! queries, inserts, updates, and deletes are performed through these repositories.

pub mod booking;
pub mod favorite;
pub mod location;
pub mod password_reset;
pub mod profile;
pub mod review;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;
