//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let vehicle = factory::vehicle::create_vehicle(&db).await?;
//!
//!     // Create a booking with all dependencies in one call
//!     let (user, vehicle, booking) = factory::helpers::create_booking_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let vehicle = factory::vehicle::VehicleFactory::new(&db)
//!     .brand("Porsche")
//!     .price_per_day(450.0)
//!     .availability(false)
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod favorite;
pub mod helpers;
pub mod location;
pub mod password_reset_token;
pub mod profile;
pub mod review;
pub mod user;
pub mod vehicle;

// Re-export commonly used factory functions for concise usage
pub use booking::create_booking;
pub use favorite::create_favorite;
pub use location::create_location;
pub use password_reset_token::create_reset_token;
pub use profile::create_profile;
pub use review::create_review;
pub use user::create_user;
pub use vehicle::create_vehicle;
