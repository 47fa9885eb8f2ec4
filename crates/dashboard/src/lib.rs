//! # Availsync Dashboard
//!
//! Everything the scheduling UI needs short of drawing widgets. Views read
//! the store and convert slots to the selected display zone; handlers take
//! operator input in that zone, validate it, and write canonical slots back.
//!
//! ## Architecture
//!
//! - **Handlers**: the add-slot form, the slot editor, and selection changes
//! - **Views**: per-role dashboards, the weekly calendar, the admin overview
//! - **Config**: session settings from the environment

/// Session configuration loaded from the environment
pub mod config;
/// Operator input: forms, edits, deletes and selections
pub mod handlers;
/// Read models for the dashboards
pub mod views;

use availsync_store::AvailabilityStore;
use eyre::Result;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

pub use config::DashboardConfig;

/// Installs the global `tracing` subscriber at the given level
///
/// # Errors
///
/// Fails if a global subscriber is already set.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Creates the session store for a configuration
///
/// # Example
///
/// ```rust
/// use availsync_dashboard::{create_store, DashboardConfig};
///
/// let store = create_store(&DashboardConfig::default());
/// assert_eq!(store.people(availsync_core::models::person::Role::User).len(), 3);
/// ```
pub fn create_store(config: &DashboardConfig) -> AvailabilityStore {
    debug!(zone = %config.zone, "creating availability store");
    AvailabilityStore::new(config.zone)
}
