#![allow(dead_code)]

use std::cell::Cell;

use availsync_core::{
    models::{
        hour::Hour,
        slot::{SlotId, SlotTimes},
        zone::Zone,
    },
    Weekday,
};
use availsync_store::{mock::MockIdSource, AvailabilityStore};
use uuid::Uuid;

pub fn hour(value: f64) -> Hour {
    Hour::from_hours(value).expect("valid hour")
}

pub fn times(day: Weekday, start: f64, end: f64) -> SlotTimes {
    SlotTimes::new(day, hour(start), hour(end))
}

/// Id of the `n`th slot added to a store from [`store_with_ids`], from 1.
pub fn nth_id(n: u128) -> SlotId {
    SlotId(Uuid::from_u128(n))
}

/// Store whose slot ids count up from 1.
pub fn store_with_ids(zone: Zone) -> AvailabilityStore {
    let counter = Cell::new(0u128);
    let mut ids = MockIdSource::new();
    ids.expect_next_id().returning(move || {
        counter.set(counter.get() + 1);
        nth_id(counter.get())
    });
    AvailabilityStore::with_id_source(zone, ids)
}
