use availsync_core::models::slot::SlotId;

/// Supplies identities for newly added slots.
pub trait SlotIdSource {
    fn next_id(&mut self) -> SlotId;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl SlotIdSource for RandomIds {
    fn next_id(&mut self) -> SlotId {
        SlotId::random()
    }
}
