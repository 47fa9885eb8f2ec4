use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{day_name, hour::Hour};

/// Opaque identity of a [`TimeSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(pub Uuid);

impl SlotId {
    pub fn random() -> Self {
        SlotId(Uuid::new_v4())
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot-{}", self.0)
    }
}

/// Day and hours of a slot without its identity, as entered in a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotTimes {
    pub day: Weekday,
    pub start: Hour,
    pub end: Hour,
}

impl SlotTimes {
    pub fn new(day: Weekday, start: Hour, end: Hour) -> Self {
        Self { day, start, end }
    }
}

/// One weekly availability interval belonging to a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: SlotId,
    pub day: Weekday,
    pub start: Hour,
    pub end: Hour,
}

impl TimeSlot {
    pub fn new(id: SlotId, times: SlotTimes) -> Self {
        Self {
            id,
            day: times.day,
            start: times.start,
            end: times.end,
        }
    }

    pub fn times(&self) -> SlotTimes {
        SlotTimes::new(self.day, self.start, self.end)
    }

    /// List label, e.g. "Monday · 09:00 – 10:00".
    pub fn label(&self) -> String {
        format!("{} · {} – {}", day_name(self.day), self.start, self.end)
    }
}
