//! Inline editing of a listed slot.

use availsync_core::{
    errors::{AvailError, AvailResult},
    models::{
        hour::Hour,
        person::Role,
        slot::{SlotId, SlotTimes, TimeSlot},
    },
    validation::{validate_edit, SlotError},
    Weekday,
};
use availsync_store::AvailabilityStore;
use serde::Serialize;
use tracing::debug;

/// Values being edited, in the display zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EditDraft {
    pub slot_id: SlotId,
    pub day: Weekday,
    pub start: Hour,
    pub end: Hour,
}

impl EditDraft {
    pub fn times(&self) -> SlotTimes {
        SlotTimes::new(self.day, self.start, self.end)
    }
}

/// At most one slot of a list is edited at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SlotEditor {
    draft: Option<EditDraft>,
    error: Option<SlotError>,
}

impl SlotEditor {
    /// Opens `slot` for editing. `slot` is expected in the display zone, as
    /// it appears in the dashboard's list.
    pub fn start_edit(&mut self, slot: &TimeSlot) {
        self.draft = Some(EditDraft {
            slot_id: slot.id,
            day: slot.day,
            start: slot.start,
            end: slot.end,
        });
        self.error = None;
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut EditDraft> {
        self.draft.as_mut()
    }

    pub fn is_editing(&self, slot_id: SlotId) -> bool {
        self.draft.is_some_and(|draft| draft.slot_id == slot_id)
    }

    pub fn error(&self) -> Option<SlotError> {
        self.error
    }

    pub fn cancel(&mut self) {
        self.draft = None;
        self.error = None;
    }

    /// Writes the draft back to the role's active person and closes it.
    ///
    /// A rejected draft stays open with its error set.
    ///
    /// # Errors
    ///
    /// [`AvailError::Slot`] for rejected values, [`AvailError::NotFound`] if
    /// nothing is being edited or the slot no longer exists.
    pub fn save(&mut self, store: &mut AvailabilityStore, role: Role) -> AvailResult<SlotId> {
        self.error = None;

        let draft = self
            .draft
            .ok_or_else(|| AvailError::NotFound("no slot is being edited".to_string()))?;
        let entered = draft.times();
        let person = store.active_person(role)?;
        let person_id = person.id.clone();
        let stored = match validate_edit(&person.slots, draft.slot_id, &entered, store.zone()) {
            Ok(stored) => stored,
            Err(error) => {
                debug!(%role, person = %person_id, slot = %draft.slot_id, %error, "edit rejected");
                self.error = Some(error);
                return Err(error.into());
            }
        };

        if !store.update(role, &person_id, draft.slot_id, stored) {
            return Err(AvailError::NotFound(format!("slot {}", draft.slot_id)));
        }

        self.draft = None;
        Ok(draft.slot_id)
    }
}
