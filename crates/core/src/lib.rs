//! # Availsync Core
//!
//! Domain types shared by every availsync crate: weekly time slots, the
//! people who own them, the two supported display zones, and the pure
//! conversion between a display zone and canonical GMT storage.
//!
//! - **Models**: [`models::slot::TimeSlot`], [`models::person::Person`],
//!   [`models::zone::Zone`] and the half-hour [`models::hour::Hour`]
//! - **Timezone**: hour and slot conversion with day roll-over
//! - **Validation**: the range and duplicate checks run before a slot is saved
//! - **Errors**: the crate-wide [`errors::AvailError`]

pub mod errors;
pub mod models;
pub mod timezone;
pub mod validation;

pub use chrono::Weekday;
