use availsync_core::errors::{AvailError, AvailResult};
use availsync_core::validation::SlotError;

#[test]
fn test_avail_error_display() {
    let not_found = AvailError::NotFound("person u9".to_string());
    let hour = AvailError::InvalidHour("24.5".to_string());
    let zone = AvailError::InvalidZone("PST".to_string());

    assert_eq!(not_found.to_string(), "Resource not found: person u9");
    assert_eq!(hour.to_string(), "Invalid hour: 24.5");
    assert_eq!(zone.to_string(), "Invalid time zone: PST");
}

#[test]
fn test_slot_error_messages() {
    assert_eq!(
        SlotError::InvalidRange.to_string(),
        "End time must be after start time."
    );
    assert_eq!(
        SlotError::DuplicateSlot.to_string(),
        "This time slot already exists."
    );
}

#[test]
fn test_from_slot_error() {
    let error: AvailError = SlotError::DuplicateSlot.into();

    assert_eq!(error, AvailError::Slot(SlotError::DuplicateSlot));
    assert_eq!(error.to_string(), "This time slot already exists.");
}

#[test]
fn test_avail_result() {
    let result: AvailResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: AvailResult<i32> = Err(AvailError::NotFound("slot".to_string()));
    assert!(result.is_err());
}
