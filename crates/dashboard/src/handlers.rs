pub mod editor;
pub mod form;

use availsync_core::{
    errors::{AvailError, AvailResult},
    models::{
        person::{PersonId, Role},
        slot::SlotId,
        zone::Zone,
    },
};
use availsync_store::AvailabilityStore;
use tracing::debug;

pub use editor::{EditDraft, SlotEditor};
pub use form::SlotForm;

/// Deletes one of the active person's slots.
///
/// # Errors
///
/// Returns [`AvailError::NotFound`] if the role has nobody to act as or the
/// slot is not theirs.
pub fn delete_slot(store: &mut AvailabilityStore, role: Role, slot_id: SlotId) -> AvailResult<()> {
    let person_id = store.active_person(role)?.id.clone();
    if store.delete(role, &person_id, slot_id) {
        Ok(())
    } else {
        Err(AvailError::NotFound(format!("slot {slot_id} of {role} {person_id}")))
    }
}

/// Switches who the role's dashboard is acting as.
///
/// An id that names nobody is kept; the dashboard then shows the role's first
/// person.
pub fn select_person(store: &mut AvailabilityStore, role: Role, person_id: PersonId) {
    if store.person(role, &person_id).is_none() {
        debug!(%role, person = %person_id, "selected id names nobody, dashboard falls back");
    } else if store.active_id(role) != &person_id {
        debug!(%role, from = %store.active_id(role), to = %person_id, "switching active person");
    }
    store.select_active(role, person_id);
}

/// Switches the zone times are shown and entered in.
///
/// Stored slots are untouched; only their presentation changes.
pub fn select_zone(store: &mut AvailabilityStore, zone: Zone) {
    if store.zone() != zone {
        debug!(from = %store.zone(), to = %zone, "switching display zone");
    }
    store.select_zone(zone);
}
