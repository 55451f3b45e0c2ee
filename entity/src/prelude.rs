pub use super::appointment::Entity as Appointment;
pub use super::business::Entity as Business;
pub use super::favorite::Entity as Favorite;
pub use super::opening_hour::Entity as OpeningHour;
pub use super::service::Entity as Service;
pub use super::user::Entity as User;
