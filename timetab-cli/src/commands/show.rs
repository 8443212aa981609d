use anyhow::Result;
use timetab_core::day::Day;
use timetab_core::store::{Action, Store, View};

use crate::render::{render_day, render_week};

/// Show the schedule. With `--day` the view switches to that day and the
/// choice is remembered; otherwise the persisted view preference applies.
pub fn run(store: &mut Store, day: Option<&str>) -> Result<()> {
    if let Some(day) = day {
        let day: Day = day.parse()?;
        store.dispatch(Action::SetView(View::Day))?;
        store.dispatch(Action::SelectDay(day))?;
    }

    let state = store.state();
    match state.prefs.view {
        View::Day => println!(
            "{}",
            render_day(&state.schedule, state.prefs.selected_day, &state.colors)
        ),
        View::Week => println!("{}", render_week(&state.schedule, &state.colors)),
    }
    Ok(())
}
