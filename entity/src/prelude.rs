pub use super::booking::Entity as Booking;
pub use super::favorite::Entity as Favorite;
pub use super::location::Entity as Location;
pub use super::password_reset_token::Entity as PasswordResetToken;
pub use super::profile::Entity as Profile;
pub use super::review::Entity as Review;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
