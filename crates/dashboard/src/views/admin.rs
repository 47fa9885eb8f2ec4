use std::fmt;

use availsync_core::models::{
    person::{Person, Role},
    zone::Zone,
};
use availsync_store::AvailabilityStore;
use serde::Serialize;

use super::{display_slots, zone_options, ZoneOption, EMPTY_READ_ONLY};

/// One person's read-only slot list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminCard {
    pub name: String,
    pub slots: Vec<String>,
}

impl AdminCard {
    fn new(person: &Person, zone: Zone) -> Self {
        Self {
            name: person.name.clone(),
            slots: display_slots(person, zone)
                .into_iter()
                .map(|view| view.label)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminSection {
    pub role: Role,
    pub title: &'static str,
    pub cards: Vec<AdminCard>,
}

/// Everyone's availability, grouped by role then person. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminOverview {
    pub zone: Zone,
    pub zones: Vec<ZoneOption>,
    pub sections: Vec<AdminSection>,
}

impl AdminOverview {
    pub fn build(store: &AvailabilityStore) -> Self {
        let zone = store.zone();
        let sections = Role::ALL
            .into_iter()
            .map(|role| AdminSection {
                role,
                title: match role {
                    Role::User => "Users",
                    Role::Mentor => "Mentors",
                },
                cards: store
                    .people(role)
                    .iter()
                    .map(|person| AdminCard::new(person, zone))
                    .collect(),
            })
            .collect();

        Self {
            zone,
            zones: zone_options(zone),
            sections,
        }
    }

    pub fn section(&self, role: Role) -> Option<&AdminSection> {
        self.sections.iter().find(|section| section.role == role)
    }
}

impl fmt::Display for AdminOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Admin Dashboard ({})", self.zone.label())?;
        for section in &self.sections {
            writeln!(f, "{}", section.title)?;
            for card in &section.cards {
                writeln!(f, "  {}", card.name)?;
                if card.slots.is_empty() {
                    writeln!(f, "    {EMPTY_READ_ONLY}")?;
                }
                for label in &card.slots {
                    writeln!(f, "    {label}")?;
                }
            }
        }
        Ok(())
    }
}
