//! # Availsync Store
//!
//! In-memory availability for one session: the seeded users and mentors,
//! their slots in canonical GMT, which person each dashboard is acting as,
//! and the selected display zone.
//!
//! The store is a plain owned value. Callers hold it and pass `&mut` to
//! mutate, so there is exactly one writer at a time.

pub mod ids;
pub mod seed;
pub mod store;

pub mod mock;

pub use ids::{RandomIds, SlotIdSource};
pub use store::AvailabilityStore;
