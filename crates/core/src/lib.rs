//! # AdSlot Core
//!
//! Domain types and pure logic for the radio advertisement slot booking
//! service: reference data models, bookings, the broadcast-day calendar and
//! the slot folder-path correlation key.

pub mod availability;
pub mod errors;
pub mod folder_path;
pub mod format;
pub mod models;
pub mod notes;
pub mod validation;
