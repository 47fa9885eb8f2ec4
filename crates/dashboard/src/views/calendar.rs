use std::fmt;

use availsync_core::{
    models::{day_name, WEEK},
    Weekday,
};
use serde::Serialize;

use super::SlotView;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub day: Weekday,
    pub name: &'static str,
    /// `"09:00 – 10:00"` for each slot on this day.
    pub entries: Vec<String>,
}

/// Seven columns, Monday through Sunday, of display-zone slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyCalendar {
    pub days: Vec<CalendarDay>,
}

impl WeeklyCalendar {
    pub fn new(slots: &[SlotView]) -> Self {
        let days = WEEK
            .into_iter()
            .map(|day| CalendarDay {
                day,
                name: day_name(day),
                entries: slots
                    .iter()
                    .filter(|view| view.slot.day == day)
                    .map(|view| format!("{} – {}", view.slot.start, view.slot.end))
                    .collect(),
            })
            .collect();
        Self { days }
    }

    pub fn day(&self, day: Weekday) -> Option<&CalendarDay> {
        self.days.iter().find(|column| column.day == day)
    }
}

impl fmt::Display for WeeklyCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Weekly Calendar")?;
        for column in &self.days {
            if column.entries.is_empty() {
                writeln!(f, "  {:<9} —", column.name)?;
            } else {
                writeln!(f, "  {:<9} {}", column.name, column.entries.join(", "))?;
            }
        }
        Ok(())
    }
}
