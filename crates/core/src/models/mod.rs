pub mod booking;
pub mod calendar;
pub mod client;
pub mod file;
pub mod program;
