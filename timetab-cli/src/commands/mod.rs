pub mod add;
pub mod color;
pub mod config;
pub mod edit;
pub mod export;
pub mod mv;
pub mod remove;
pub mod session;
pub mod show;
pub mod stats;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use timetab_core::config::TimetabConfig;
use timetab_core::conflict::TimeConflict;
use timetab_core::store::{DispatchError, Store};

/// Load config + persisted state and build a store whose changes are written
/// back to the state directory. A failed write warns and continues — the
/// in-memory operation already happened.
pub fn open_store() -> Result<Store> {
    let config = TimetabConfig::load().context("Could not load configuration")?;
    let state_dir = config.state_dir();

    let mut store = Store::new(state_dir.load());
    store.on_change(move |state| {
        if let Err(e) = state_dir.save(state) {
            eprintln!(
                "{}",
                format!("  Warning: could not save state: {e}").yellow()
            );
        }
    });

    Ok(store)
}

/// Print non-blocking adjacency warnings.
pub fn print_warnings(warnings: &[TimeConflict]) {
    for warning in warnings {
        println!("  {} {}", "!".yellow(), warning.message.yellow());
    }
}

/// Print a refused dispatch: the primary message, then any overlap details.
pub fn print_dispatch_error(err: &DispatchError) {
    eprintln!("  {}", err.to_string().red());
    if let DispatchError::Validation(timetab_core::conflict::ValidationError::Conflict {
        conflicts,
    }) = err
    {
        for conflict in conflicts {
            if conflict.is_overlap() {
                eprintln!("    {}", conflict.message.red());
            } else {
                eprintln!("    {}", conflict.message.yellow());
            }
        }
    }
}
