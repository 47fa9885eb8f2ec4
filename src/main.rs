use availsync_core::{
    models::{hour::Hour, person::Role, zone::Zone},
    Weekday,
};
use availsync_dashboard::{
    create_store,
    handlers::{select_zone, SlotEditor, SlotForm},
    init_tracing,
    views::{AdminOverview, PersonDashboard},
    DashboardConfig,
};
use color_eyre::eyre::Result;
use dotenv::dotenv;
use tracing::{info, warn};

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = DashboardConfig::from_env()?;
    init_tracing(config.log_level)?;

    let mut store = create_store(&config);
    info!(zone = %store.zone(), "session started");

    // Alice adds two slots, the second one twice
    SlotForm::default().submit(&mut store, Role::User)?;
    let afternoon = || -> Result<SlotForm> {
        Ok(SlotForm::new(
            Weekday::Wed,
            Hour::from_hours(14.0)?,
            Hour::from_hours(15.5)?,
        ))
    };
    afternoon()?.submit(&mut store, Role::User)?;
    if let Err(error) = afternoon()?.submit(&mut store, Role::User) {
        warn!(%error, "second submission rejected");
    }

    // Dr. Smith adds a late slot and moves it by an hour
    SlotForm::new(Weekday::Fri, Hour::from_hours(22.0)?, Hour::from_hours(23.5)?)
        .submit(&mut store, Role::Mentor)?;

    let dashboard = PersonDashboard::build(&store, Role::Mentor)?;
    let mut editor = SlotEditor::default();
    if let Some(view) = dashboard.slots.first() {
        editor.start_edit(&view.slot);
        if let Some(draft) = editor.draft_mut() {
            draft.start = Hour::from_hours(21.0)?;
            draft.end = Hour::from_hours(22.5)?;
        }
        editor.save(&mut store, Role::Mentor)?;
    }

    println!("{}", PersonDashboard::build(&store, Role::User)?);
    println!("{}", PersonDashboard::build(&store, Role::Mentor)?);

    for zone in Zone::ALL {
        select_zone(&mut store, zone);
        println!("{}", AdminOverview::build(&store));
    }

    Ok(())
}
