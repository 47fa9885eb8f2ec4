pub mod admin;
pub mod calendar;
pub mod person;

use availsync_core::{
    models::{day_name, person::Person, slot::TimeSlot, zone::Zone},
    timezone::slot_from_canonical,
};
use serde::Serialize;

pub use admin::AdminOverview;
pub use calendar::WeeklyCalendar;
pub use person::PersonDashboard;

/// Shown on an editable dashboard with no slots.
pub const EMPTY_EDITABLE: &str = "No time slots yet. Add one above.";

/// Shown on a read-only card with no slots.
pub const EMPTY_READ_ONLY: &str = "No availability submitted.";

/// A slot as it is displayed: converted to the display zone and labelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub slot: TimeSlot,
    pub day_name: &'static str,
    pub label: String,
}

impl SlotView {
    pub fn new(stored: &TimeSlot, zone: Zone) -> Self {
        let slot = slot_from_canonical(stored, zone);
        Self {
            day_name: day_name(slot.day),
            label: slot.label(),
            slot,
        }
    }
}

/// A person's slots in `zone`, in their stored order.
pub fn display_slots(person: &Person, zone: Zone) -> Vec<SlotView> {
    person
        .slots
        .iter()
        .map(|slot| SlotView::new(slot, zone))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneOption {
    pub zone: Zone,
    pub label: &'static str,
    pub selected: bool,
}

/// Entries of the zone selector.
pub fn zone_options(selected: Zone) -> Vec<ZoneOption> {
    Zone::ALL
        .into_iter()
        .map(|zone| ZoneOption {
            zone,
            label: zone.label(),
            selected: zone == selected,
        })
        .collect()
}
