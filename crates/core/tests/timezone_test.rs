use chrono::Weekday;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use availsync_core::models::{
    hour::Hour,
    slot::{SlotId, SlotTimes, TimeSlot},
    zone::Zone,
};
use availsync_core::timezone::{
    format_hour, from_canonical, slot_from_canonical, slot_to_canonical, to_canonical, DayShift,
};

fn hour(value: f64) -> Hour {
    Hour::from_hours(value).expect("valid hour")
}

#[rstest]
#[case(0.0, 5.5, DayShift::Same)]
#[case(20.0, 1.5, DayShift::Next)]
#[case(18.5, 0.0, DayShift::Next)]
#[case(18.0, 23.5, DayShift::Same)]
fn test_from_canonical_to_ist(#[case] stored: f64, #[case] shown: f64, #[case] shift: DayShift) {
    let result = from_canonical(hour(stored), Zone::Ist);
    assert_eq!(result.hour, hour(shown));
    assert_eq!(result.shift, shift);
}

#[rstest]
#[case(2.0, 20.5, DayShift::Previous)]
#[case(5.5, 0.0, DayShift::Same)]
#[case(5.0, 23.5, DayShift::Previous)]
#[case(23.5, 18.0, DayShift::Same)]
fn test_ist_to_canonical(#[case] shown: f64, #[case] stored: f64, #[case] shift: DayShift) {
    let result = to_canonical(hour(shown), Zone::Ist);
    assert_eq!(result.hour, hour(stored));
    assert_eq!(result.shift, shift);
}

#[test]
fn test_gmt_is_identity() {
    for value in Hour::options() {
        let result = to_canonical(value, Zone::Gmt);
        assert_eq!(result.hour, value);
        assert_eq!(result.shift, DayShift::Same);
        assert_eq!(from_canonical(value, Zone::Gmt).hour, value);
    }
}

#[rstest]
#[case(DayShift::Previous, Weekday::Mon, Weekday::Sun)]
#[case(DayShift::Next, Weekday::Sun, Weekday::Mon)]
#[case(DayShift::Same, Weekday::Thu, Weekday::Thu)]
fn test_day_shift_wraps_week(#[case] shift: DayShift, #[case] day: Weekday, #[case] expected: Weekday) {
    assert_eq!(shift.apply(day), expected);
}

#[test]
fn test_day_shift_offsets() {
    assert_eq!(DayShift::Previous.offset(), -1);
    assert_eq!(DayShift::Same.offset(), 0);
    assert_eq!(DayShift::Next.offset(), 1);
}

#[test]
fn test_slot_to_canonical_moves_day_by_start() {
    let entered = SlotTimes::new(Weekday::Mon, hour(2.0), hour(6.0));
    let stored = slot_to_canonical(entered, Zone::Ist);

    assert_eq!(stored, SlotTimes::new(Weekday::Sun, hour(20.5), hour(0.5)));
}

#[test]
fn test_slot_to_canonical_keeps_day_when_only_end_wraps() {
    let entered = SlotTimes::new(Weekday::Tue, hour(5.0), hour(5.5));
    let stored = slot_to_canonical(entered, Zone::Ist);

    // start wraps to the previous day, end does not
    assert_eq!(stored, SlotTimes::new(Weekday::Mon, hour(23.5), hour(0.0)));
}

#[test]
fn test_slot_from_canonical_keeps_id() {
    let stored = TimeSlot::new(
        SlotId::random(),
        SlotTimes::new(Weekday::Sun, hour(20.5), hour(0.5)),
    );
    let shown = slot_from_canonical(&stored, Zone::Ist);

    assert_eq!(shown.id, stored.id);
    assert_eq!(shown.times(), SlotTimes::new(Weekday::Mon, hour(2.0), hour(6.0)));
}

#[rstest]
#[case(9.5, "09:30")]
#[case(0.0, "00:00")]
#[case(23.5, "23:30")]
#[case(12.0, "12:00")]
fn test_format_hour(#[case] value: f64, #[case] expected: &str) {
    assert_eq!(format_hour(hour(value)), expected);
    assert_eq!(hour(value).to_string(), expected);
}

fn any_hour() -> impl Strategy<Value = Hour> {
    (0u8..Hour::MARKS_PER_DAY).prop_map(|marks| Hour::from_half_hours(marks).unwrap())
}

fn any_zone() -> impl Strategy<Value = Zone> {
    prop_oneof![Just(Zone::Gmt), Just(Zone::Ist)]
}

fn any_day() -> impl Strategy<Value = Weekday> {
    (0u8..7).prop_map(|i| availsync_core::models::WEEK[usize::from(i)])
}

proptest! {
    #[test]
    fn prop_zone_round_trip(value in any_hour(), zone in any_zone()) {
        let stored = to_canonical(value, zone);
        let shown = from_canonical(stored.hour, zone);
        prop_assert_eq!(shown.hour, value);
        prop_assert_eq!(shown.shift.offset(), -stored.shift.offset());
    }

    #[test]
    fn prop_canonical_round_trip(value in any_hour(), zone in any_zone()) {
        let shown = from_canonical(value, zone);
        prop_assert_eq!(to_canonical(shown.hour, zone).hour, value);
    }

    #[test]
    fn prop_slot_round_trip(day in any_day(), start in any_hour(), end in any_hour(), zone in any_zone()) {
        let entered = SlotTimes::new(day, start, end);
        let stored = TimeSlot::new(SlotId::random(), slot_to_canonical(entered, zone));
        prop_assert_eq!(slot_from_canonical(&stored, zone).times(), entered);
    }
}
