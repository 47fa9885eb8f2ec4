use std::fmt;

use availsync_core::{
    errors::{AvailError, AvailResult},
    models::{
        person::{Person, PersonId, Role},
        slot::{SlotId, SlotTimes, TimeSlot},
        zone::Zone,
    },
};
use tracing::debug;

use crate::{
    ids::{RandomIds, SlotIdSource},
    seed::{demo_mentors, demo_users},
};

/// Users, mentors and their canonical slots for one session.
///
/// Operations addressed at a person or slot that does not exist change
/// nothing; the return value says whether anything happened.
pub struct AvailabilityStore {
    users: Vec<Person>,
    mentors: Vec<Person>,
    active_user: PersonId,
    active_mentor: PersonId,
    zone: Zone,
    ids: Box<dyn SlotIdSource>,
}

impl AvailabilityStore {
    /// Creates a store seeded with the demo people, displaying in `zone`.
    pub fn new(zone: Zone) -> Self {
        Self::with_id_source(zone, RandomIds)
    }

    /// Like [`AvailabilityStore::new`], drawing slot ids from `ids`.
    pub fn with_id_source(zone: Zone, ids: impl SlotIdSource + 'static) -> Self {
        let users = demo_users();
        let mentors = demo_mentors();
        Self {
            active_user: first_id(&users),
            active_mentor: first_id(&mentors),
            users,
            mentors,
            zone,
            ids: Box::new(ids),
        }
    }

    /// Drops every slot and selection, restoring the seed people.
    ///
    /// The display zone and id source are kept.
    pub fn reset(&mut self) {
        self.users = demo_users();
        self.mentors = demo_mentors();
        self.active_user = first_id(&self.users);
        self.active_mentor = first_id(&self.mentors);
        debug!("store reset to seed data");
    }

    pub fn people(&self, role: Role) -> &[Person] {
        match role {
            Role::User => &self.users,
            Role::Mentor => &self.mentors,
        }
    }

    pub fn person(&self, role: Role, id: &PersonId) -> Option<&Person> {
        self.people(role).iter().find(|person| person.id == *id)
    }

    fn person_mut(&mut self, role: Role, id: &PersonId) -> Option<&mut Person> {
        let people = match role {
            Role::User => &mut self.users,
            Role::Mentor => &mut self.mentors,
        };
        people.iter_mut().find(|person| person.id == *id)
    }

    /// Appends a slot with a fresh id to the person's slots.
    ///
    /// Returns `None` if no such person exists.
    pub fn add(&mut self, role: Role, person_id: &PersonId, times: SlotTimes) -> Option<SlotId> {
        if self.person(role, person_id).is_none() {
            debug!(%role, person = %person_id, "add ignored, no such person");
            return None;
        }

        let id = self.ids.next_id();
        let person = self.person_mut(role, person_id)?;
        person.slots.push(TimeSlot::new(id, times));
        debug!(%role, person = %person_id, slot = %id, ?times, "slot added");
        Some(id)
    }

    /// Replaces the day and hours of a slot, keeping its id and position.
    ///
    /// Returns `false` if the person or slot was not found.
    pub fn update(
        &mut self,
        role: Role,
        person_id: &PersonId,
        slot_id: SlotId,
        times: SlotTimes,
    ) -> bool {
        let slot = self
            .person_mut(role, person_id)
            .and_then(|person| person.slots.iter_mut().find(|slot| slot.id == slot_id));

        match slot {
            Some(slot) => {
                *slot = TimeSlot::new(slot_id, times);
                debug!(%role, person = %person_id, slot = %slot_id, ?times, "slot updated");
                true
            }
            None => {
                debug!(%role, person = %person_id, slot = %slot_id, "update ignored, no such slot");
                false
            }
        }
    }

    /// Removes a slot.
    ///
    /// Returns `false` if the person or slot was not found.
    pub fn delete(&mut self, role: Role, person_id: &PersonId, slot_id: SlotId) -> bool {
        let Some(person) = self.person_mut(role, person_id) else {
            debug!(%role, person = %person_id, "delete ignored, no such person");
            return false;
        };

        let before = person.slots.len();
        person.slots.retain(|slot| slot.id != slot_id);
        let removed = person.slots.len() != before;
        if removed {
            debug!(%role, person = %person_id, slot = %slot_id, "slot deleted");
        } else {
            debug!(%role, person = %person_id, slot = %slot_id, "delete ignored, no such slot");
        }
        removed
    }

    /// The id the role's dashboard is acting as, which may name nobody.
    pub fn active_id(&self, role: Role) -> &PersonId {
        match role {
            Role::User => &self.active_user,
            Role::Mentor => &self.active_mentor,
        }
    }

    /// Points the role's dashboard at `id`. The id is not checked.
    pub fn select_active(&mut self, role: Role, id: PersonId) {
        debug!(%role, person = %id, "active person selected");
        match role {
            Role::User => self.active_user = id,
            Role::Mentor => self.active_mentor = id,
        }
    }

    /// The person the role's dashboard shows.
    ///
    /// Falls back to the first person of the role when the active id names
    /// nobody.
    ///
    /// # Errors
    ///
    /// Returns [`AvailError::NotFound`] if the role has no people at all.
    pub fn active_person(&self, role: Role) -> AvailResult<&Person> {
        self.person(role, self.active_id(role))
            .or_else(|| self.people(role).first())
            .ok_or_else(|| AvailError::NotFound(format!("no {role} to act as")))
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn select_zone(&mut self, zone: Zone) {
        debug!(%zone, "display zone selected");
        self.zone = zone;
    }
}

impl fmt::Debug for AvailabilityStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvailabilityStore")
            .field("users", &self.users)
            .field("mentors", &self.mentors)
            .field("active_user", &self.active_user)
            .field("active_mentor", &self.active_mentor)
            .field("zone", &self.zone)
            .finish_non_exhaustive()
    }
}

fn first_id(people: &[Person]) -> PersonId {
    people
        .first()
        .map(|person| person.id.clone())
        .unwrap_or_else(|| PersonId::new(""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use availsync_core::{models::hour::Hour, Weekday};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_seeded_selection_points_at_first_people() {
        let store = AvailabilityStore::new(Zone::Ist);

        assert_eq!(store.active_id(Role::User).as_str(), "u1");
        assert_eq!(store.active_id(Role::Mentor).as_str(), "m1");
        assert_eq!(store.zone(), Zone::Ist);
    }

    #[test]
    fn test_add_to_missing_person_is_noop() {
        let mut store = AvailabilityStore::new(Zone::Gmt);
        let times = SlotTimes::new(Weekday::Mon, Hour::MIDNIGHT, Hour::LAST);

        assert_eq!(store.add(Role::User, &PersonId::from("m1"), times), None);
        assert!(store.people(Role::User).iter().all(|p| p.slots.is_empty()));
    }
}
