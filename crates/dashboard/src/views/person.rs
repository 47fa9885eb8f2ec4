use std::fmt;

use availsync_core::{
    errors::AvailResult,
    models::{
        person::{PersonId, Role},
        zone::Zone,
    },
};
use availsync_store::AvailabilityStore;
use serde::Serialize;

use super::{display_slots, zone_options, SlotView, WeeklyCalendar, ZoneOption, EMPTY_EDITABLE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonOption {
    pub id: PersonId,
    pub name: String,
    pub selected: bool,
}

/// The single-person dashboard for users or mentors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonDashboard {
    pub role: Role,
    pub heading: String,
    pub people: Vec<PersonOption>,
    pub zones: Vec<ZoneOption>,
    pub zone: Zone,
    pub title: String,
    pub slots: Vec<SlotView>,
    pub calendar: WeeklyCalendar,
}

impl PersonDashboard {
    /// Builds the dashboard for the role's active person in the store's zone.
    pub fn build(store: &AvailabilityStore, role: Role) -> AvailResult<Self> {
        let zone = store.zone();
        let person = store.active_person(role)?;
        let slots = display_slots(person, zone);

        let people = store
            .people(role)
            .iter()
            .map(|candidate| PersonOption {
                id: candidate.id.clone(),
                name: candidate.name.clone(),
                selected: candidate.id == person.id,
            })
            .collect();

        Ok(Self {
            role,
            heading: format!("{} Dashboard", role.label()),
            people,
            zones: zone_options(zone),
            zone,
            title: format!("{}'s Time Slots", person.name),
            calendar: WeeklyCalendar::new(&slots),
            slots,
        })
    }

    /// The placeholder shown instead of the list, if there is nothing to list.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.slots.is_empty().then_some(EMPTY_EDITABLE)
    }
}

impl fmt::Display for PersonDashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.heading, self.zone.label())?;
        writeln!(f, "{}", self.title)?;
        match self.empty_message() {
            Some(message) => writeln!(f, "  {message}")?,
            None => {
                for view in &self.slots {
                    writeln!(f, "  {}", view.label)?;
                }
            }
        }
        write!(f, "{}", self.calendar)
    }
}
