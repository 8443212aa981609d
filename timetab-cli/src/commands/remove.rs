use anyhow::Result;
use owo_colors::OwoColorize;
use timetab_core::day::Day;
use timetab_core::store::{Action, Store};

use super::edit::find_by_start;

pub fn run(store: &mut Store, day: &str, start: &str) -> Result<()> {
    let day: Day = day.parse()?;
    let class = find_by_start(store, day, start)?;

    store.dispatch(Action::Remove {
        day,
        time: class.time,
    })?;

    println!(
        "{}",
        format!("  Removed: {} ({}, {day})", class.name, class.time).green()
    );
    Ok(())
}
