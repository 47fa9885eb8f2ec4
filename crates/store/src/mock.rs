use availsync_core::models::slot::SlotId;
use mockall::mock;

use crate::ids::SlotIdSource;

// Mock id source for deterministic tests
mock! {
    pub IdSource {}

    impl SlotIdSource for IdSource {
        fn next_id(&mut self) -> SlotId;
    }
}
