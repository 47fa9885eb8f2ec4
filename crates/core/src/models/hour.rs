use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{AvailError, AvailResult};
use crate::timezone::format_hour;

/// A time of day on the half-hour grid, `00:00` through `23:30`.
///
/// Stored as a count of half-hour marks so equality is exact; serialized as
/// fractional hours (`9.5` for `09:30`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct Hour(pub(crate) u8);

impl Hour {
    /// Number of half-hour marks in one day.
    pub const MARKS_PER_DAY: u8 = 48;

    pub const MIDNIGHT: Hour = Hour(0);

    /// `09:00`, where the add form starts.
    pub const NINE: Hour = Hour(18);

    /// `10:00`, where the add form ends.
    pub const TEN: Hour = Hour(20);

    /// The last selectable mark, `23:30`.
    pub const LAST: Hour = Hour(Self::MARKS_PER_DAY - 1);

    /// Builds an hour from a count of half-hour marks since midnight.
    pub fn from_half_hours(marks: u8) -> Option<Self> {
        (marks < Self::MARKS_PER_DAY).then_some(Hour(marks))
    }

    /// Builds an hour from fractional hours, e.g. `9.5`.
    ///
    /// # Errors
    ///
    /// Returns [`AvailError::InvalidHour`] unless `hours` is a half-hour mark
    /// in `[0, 24)`.
    pub fn from_hours(hours: f64) -> AvailResult<Self> {
        let marks = hours * 2.0;
        if !marks.is_finite() || marks.fract() != 0.0 || !(0.0..48.0).contains(&marks) {
            return Err(AvailError::InvalidHour(hours.to_string()));
        }
        Ok(Hour(marks as u8))
    }

    pub fn half_hours(self) -> u8 {
        self.0
    }

    pub fn as_hours(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    /// One hour later, clamped to `23:30`.
    pub fn next_hour_clamped(self) -> Self {
        Hour((self.0 + 2).min(Self::LAST.0))
    }

    /// The 48 selectable values, ascending from midnight.
    pub fn options() -> impl Iterator<Item = Hour> {
        (0..Self::MARKS_PER_DAY).map(Hour)
    }
}

impl From<Hour> for f64 {
    fn from(hour: Hour) -> Self {
        hour.as_hours()
    }
}

impl TryFrom<f64> for Hour {
    type Error = AvailError;

    fn try_from(hours: f64) -> AvailResult<Self> {
        Hour::from_hours(hours)
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_hour(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0)]
    #[case(9.5, 19)]
    #[case(23.5, 47)]
    fn test_from_hours_accepts_half_hour_marks(#[case] hours: f64, #[case] marks: u8) {
        assert_eq!(Hour::from_hours(hours).unwrap().half_hours(), marks);
    }

    #[rstest]
    #[case(-0.5)]
    #[case(24.0)]
    #[case(9.25)]
    #[case(f64::NAN)]
    fn test_from_hours_rejects_off_grid(#[case] hours: f64) {
        assert!(matches!(Hour::from_hours(hours), Err(AvailError::InvalidHour(_))));
    }

    #[test]
    fn test_next_hour_clamps_at_last_mark() {
        let h = |v| Hour::from_hours(v).unwrap();
        assert_eq!(h(10.0).next_hour_clamped(), h(11.0));
        assert_eq!(h(23.0).next_hour_clamped(), Hour::LAST);
        assert_eq!(Hour::LAST.next_hour_clamped(), Hour::LAST);
    }

    #[test]
    fn test_named_hours() {
        assert_eq!(Hour::NINE.to_string(), "09:00");
        assert_eq!(Hour::TEN.to_string(), "10:00");
    }

    #[test]
    fn test_options_cover_the_day() {
        let options: Vec<Hour> = Hour::options().collect();
        assert_eq!(options.len(), 48);
        assert_eq!(options.first(), Some(&Hour::MIDNIGHT));
        assert_eq!(options.last(), Some(&Hour::LAST));
        assert!(options.windows(2).all(|w| w[0] < w[1]));
    }
}
