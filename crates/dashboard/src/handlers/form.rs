//! The "Add Availability" form.

use availsync_core::{
    errors::{AvailError, AvailResult},
    models::{
        hour::Hour,
        person::Role,
        slot::{SlotId, SlotTimes},
    },
    validation::{validate_new, SlotError},
    Weekday,
};
use availsync_store::AvailabilityStore;
use serde::Serialize;
use tracing::debug;

/// Input state of the add-slot form, in the store's display zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotForm {
    pub day: Weekday,
    pub start: Hour,
    pub end: Hour,
    error: Option<SlotError>,
}

impl Default for SlotForm {
    fn default() -> Self {
        Self::new(Weekday::Mon, Hour::NINE, Hour::TEN)
    }
}

impl SlotForm {
    /// A form pre-filled with the given day and hours.
    pub fn new(day: Weekday, start: Hour, end: Hour) -> Self {
        Self {
            day,
            start,
            end,
            error: None,
        }
    }

    pub fn times(&self) -> SlotTimes {
        SlotTimes::new(self.day, self.start, self.end)
    }

    /// The message shown above the form after a rejected submission.
    pub fn error(&self) -> Option<SlotError> {
        self.error
    }

    /// Adds the entered slot to the role's active person.
    ///
    /// Any previous error is cleared first. A rejected slot leaves the store
    /// untouched and is kept as the form's error. After a successful add the
    /// form moves on to the following hour.
    ///
    /// # Errors
    ///
    /// [`AvailError::Slot`] with [`SlotError::InvalidRange`] or
    /// [`SlotError::DuplicateSlot`] for rejected input, or
    /// [`AvailError::NotFound`] if the role has nobody to act as.
    pub fn submit(&mut self, store: &mut AvailabilityStore, role: Role) -> AvailResult<SlotId> {
        self.error = None;

        let entered = self.times();
        let person = store.active_person(role)?;
        let person_id = person.id.clone();
        let stored = match validate_new(&person.slots, &entered, store.zone()) {
            Ok(stored) => stored,
            Err(error) => {
                debug!(%role, person = %person_id, ?entered, %error, "slot rejected");
                self.error = Some(error);
                return Err(error.into());
            }
        };

        let id = store
            .add(role, &person_id, stored)
            .ok_or_else(|| AvailError::NotFound(format!("{role} {person_id}")))?;

        self.start = self.end;
        self.end = self.end.next_hour_clamped();
        Ok(id)
    }
}
