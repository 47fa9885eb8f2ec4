//! Checks run at the form boundary before a slot reaches the store.
//!
//! The store itself accepts any well-formed call; these functions are what
//! keep a person's slots valid and unique on `(day, start, end)`.

use serde::Serialize;
use thiserror::Error;

use crate::models::{
    slot::{SlotId, SlotTimes, TimeSlot},
    zone::Zone,
};
use crate::timezone::{slot_from_canonical, slot_to_canonical};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SlotError {
    #[error("End time must be after start time.")]
    InvalidRange,

    #[error("This time slot already exists.")]
    DuplicateSlot,
}

/// Rejects `times` unless `end` is after `start`.
pub fn check_range(times: &SlotTimes) -> Result<(), SlotError> {
    if times.end <= times.start {
        return Err(SlotError::InvalidRange);
    }
    Ok(())
}

/// Rejects `times` if any of `slots` has the same day, start and end.
pub fn check_unique<'a>(
    slots: impl IntoIterator<Item = &'a TimeSlot>,
    times: &SlotTimes,
) -> Result<(), SlotError> {
    if slots.into_iter().any(|slot| slot.times() == *times) {
        return Err(SlotError::DuplicateSlot);
    }
    Ok(())
}

/// Validates a slot entered in `zone` against a person's stored slots.
///
/// The range is checked on the hours as entered; uniqueness is checked on
/// the canonical times, which are returned for storing.
pub fn validate_new(
    existing: &[TimeSlot],
    entered: &SlotTimes,
    zone: Zone,
) -> Result<SlotTimes, SlotError> {
    check_range(entered)?;
    let stored = slot_to_canonical(*entered, zone);
    check_unique(existing, &stored)?;
    Ok(stored)
}

/// Validates an edit like [`validate_new`], ignoring the slot being edited.
///
/// Saving a slot unchanged is always accepted, even when its end wraps past
/// midnight in `zone` because it was entered in another zone.
pub fn validate_edit(
    existing: &[TimeSlot],
    editing: SlotId,
    entered: &SlotTimes,
    zone: Zone,
) -> Result<SlotTimes, SlotError> {
    let unchanged = existing
        .iter()
        .find(|slot| slot.id == editing)
        .is_some_and(|slot| slot_from_canonical(slot, zone).times() == *entered);
    if !unchanged {
        check_range(entered)?;
    }
    let stored = slot_to_canonical(*entered, zone);
    check_unique(existing.iter().filter(|slot| slot.id != editing), &stored)?;
    Ok(stored)
}
