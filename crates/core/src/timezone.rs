//! Conversion between a display zone and canonical GMT storage.
//!
//! Slots are always stored in [`Zone::CANONICAL`]. Converting moves the hour
//! by the zone offset and wraps it back into `[0, 24)`, reporting whether the
//! wrap crossed into the previous or next day.
//!
//! A slot's day follows its **start** only. The end hour is shifted and
//! wrapped the same way, but its own day change is dropped, so a slot that
//! crosses midnight in one zone is stored with `end < start` in the other.
//! Converting back restores the entered values.

use chrono::Weekday;
use serde::Serialize;

use crate::models::{
    hour::Hour,
    slot::{SlotTimes, TimeSlot},
    zone::Zone,
};

const MARKS_PER_DAY: i16 = Hour::MARKS_PER_DAY as i16;

/// Day change caused by a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayShift {
    Previous,
    Same,
    Next,
}

impl DayShift {
    /// `-1`, `0` or `1`.
    pub fn offset(self) -> i8 {
        match self {
            DayShift::Previous => -1,
            DayShift::Same => 0,
            DayShift::Next => 1,
        }
    }

    /// Moves `day` circularly through the Monday..Sunday week.
    pub fn apply(self, day: Weekday) -> Weekday {
        match self {
            DayShift::Previous => day.pred(),
            DayShift::Same => day,
            DayShift::Next => day.succ(),
        }
    }
}

/// A converted hour and the day change it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shifted {
    pub hour: Hour,
    pub shift: DayShift,
}

fn wrap(marks: i16) -> Shifted {
    let (marks, shift) = if marks < 0 {
        (marks + MARKS_PER_DAY, DayShift::Previous)
    } else if marks >= MARKS_PER_DAY {
        (marks - MARKS_PER_DAY, DayShift::Next)
    } else {
        (marks, DayShift::Same)
    };

    // Offsets are below one day, so one wrap always lands inside the grid.
    debug_assert!((0..MARKS_PER_DAY).contains(&marks));
    Shifted {
        hour: Hour(marks as u8),
        shift,
    }
}

/// Converts an hour entered in `from` to canonical storage time.
///
/// # Examples
///
/// ```
/// use availsync_core::models::{hour::Hour, zone::Zone};
/// use availsync_core::timezone::{to_canonical, DayShift};
///
/// let stored = to_canonical(Hour::from_hours(2.0).unwrap(), Zone::Ist);
/// assert_eq!(stored.hour, Hour::from_hours(20.5).unwrap());
/// assert_eq!(stored.shift, DayShift::Previous);
/// ```
pub fn to_canonical(hour: Hour, from: Zone) -> Shifted {
    wrap(i16::from(hour.half_hours()) - from.offset_half_hours())
}

/// Converts a canonical hour for display in `to`.
pub fn from_canonical(hour: Hour, to: Zone) -> Shifted {
    wrap(i16::from(hour.half_hours()) + to.offset_half_hours())
}

/// Converts form input in `from` to the canonical times to store.
pub fn slot_to_canonical(times: SlotTimes, from: Zone) -> SlotTimes {
    let start = to_canonical(times.start, from);
    let end = to_canonical(times.end, from);
    SlotTimes::new(start.shift.apply(times.day), start.hour, end.hour)
}

/// Converts a stored slot for display in `to`, keeping its id.
pub fn slot_from_canonical(slot: &TimeSlot, to: Zone) -> TimeSlot {
    let start = from_canonical(slot.start, to);
    let end = from_canonical(slot.end, to);
    TimeSlot {
        id: slot.id,
        day: start.shift.apply(slot.day),
        start: start.hour,
        end: end.hour,
    }
}

/// Renders an hour as `HH:MM`.
pub fn format_hour(hour: Hour) -> String {
    let hours = hour.as_hours();
    let whole = hours.floor();
    let minutes = ((hours - whole) * 60.0).round();
    format!("{:02}:{:02}", whole as u32, minutes as u32)
}
