pub mod bookings;
pub mod calendar;
pub mod files;
pub mod health;
pub mod reference;
