//! Interactive session.
//!
//! History lives in memory only — the schedule file survives a restart,
//! undo/redo history does not. The session keeps one store alive across many
//! edits, which is where undo and redo earn their keep.

use anyhow::Result;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use timetab_core::class::ClassItem;
use timetab_core::day::Day;
use timetab_core::store::{Action, DispatchError, Store};
use timetab_core::time::format_minutes;

use super::add::{AddArgs, prompt_day};
use super::edit::EditArgs;
use super::{add, color, edit, export, print_dispatch_error, remove, show, stats};

const MENU: [&str; 11] = [
    "Show schedule",
    "Add class",
    "Edit class",
    "Remove class",
    "Undo",
    "Redo",
    "Set color",
    "Stats",
    "Export",
    "Select day",
    "Quit",
];

pub fn run(store: &mut Store) -> Result<()> {
    loop {
        println!();
        let choice = Select::new()
            .with_prompt("timetab")
            .items(&MENU)
            .default(0)
            .interact()?;

        match MENU[choice] {
            "Show schedule" => report(show::run(store, None)),
            "Add class" => report(add::run(store, AddArgs::default())),
            "Edit class" => report(edit_picked(store)),
            "Remove class" => report(remove_picked(store)),
            "Undo" => {
                if store.can_undo() {
                    store.dispatch(Action::Undo)?;
                    println!("  {}", "Undid last change".green());
                } else {
                    println!("  {}", "Nothing to undo".dimmed());
                }
            }
            "Redo" => {
                if store.can_redo() {
                    store.dispatch(Action::Redo)?;
                    println!("  {}", "Redid last change".green());
                } else {
                    println!("  {}", "Nothing to redo".dimmed());
                }
            }
            "Set color" => report(color_picked(store)),
            "Stats" => report(stats::run(store)),
            "Export" => report(export::run(store, None)),
            "Select day" => {
                let day = prompt_day(store.prefs().selected_day)?;
                store.dispatch(Action::SelectDay(day))?;
            }
            _ => return Ok(()),
        }
    }
}

/// Print a failure once: dispatch refusals in full, anything else plain.
fn report(result: Result<()>) {
    if let Err(e) = result {
        match e.downcast_ref::<DispatchError>() {
            Some(dispatch) => print_dispatch_error(dispatch),
            None => eprintln!("  {}", e.to_string().red()),
        }
    }
}

/// Pick an existing class: day first, then one of its entries.
fn pick_class(store: &Store) -> Result<Option<(Day, ClassItem)>> {
    let day = prompt_day(store.prefs().selected_day)?;
    let classes: Vec<ClassItem> = store
        .schedule()
        .sorted_day(day)
        .into_iter()
        .cloned()
        .collect();
    if classes.is_empty() {
        println!("  {}", format!("No classes on {day}").dimmed());
        return Ok(None);
    }

    let labels: Vec<String> = classes
        .iter()
        .map(|c| format!("{} {}", c.time, c.name))
        .collect();
    let choice = Select::new()
        .with_prompt("  Class")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Some((day, classes[choice].clone())))
}

fn edit_picked(store: &mut Store) -> Result<()> {
    let Some((day, class)) = pick_class(store)? else {
        return Ok(());
    };

    let name: String = Input::new()
        .with_prompt("  Course name")
        .default(class.name.clone())
        .interact_text()?;
    let start: String = Input::new()
        .with_prompt("  Start (HH:MM)")
        .default(format_minutes(class.time.start))
        .interact_text()?;
    let end: String = Input::new()
        .with_prompt("  End (HH:MM)")
        .default(format_minutes(class.time.end))
        .interact_text()?;
    let location: String = Input::new()
        .with_prompt("  Room")
        .default(class.location.clone().unwrap_or_default())
        .show_default(true)
        .interact_text()?;

    edit::run(
        store,
        day.key(),
        &format_minutes(class.time.start),
        EditArgs {
            name: Some(name),
            start: Some(start),
            end: Some(end),
            location: Some(location),
            ..Default::default()
        },
    )
}

fn remove_picked(store: &mut Store) -> Result<()> {
    let Some((day, class)) = pick_class(store)? else {
        return Ok(());
    };
    remove::run(store, day.key(), &format_minutes(class.time.start))
}

fn color_picked(store: &mut Store) -> Result<()> {
    let courses: Vec<String> = store.colors().keys().cloned().collect();
    if courses.is_empty() {
        println!("  {}", "No courses on the schedule yet".dimmed());
        return Ok(());
    }
    let choice = Select::new()
        .with_prompt("  Course")
        .items(&courses)
        .default(0)
        .interact()?;
    color::run(store, Some(&courses[choice]), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::mv;
    use timetab_core::store::ScheduleState;

    // `report` tells dispatch refusals apart by downcasting, so command
    // helpers must hand them back typed rather than flattened into a string.
    #[test]
    fn refused_edit_keeps_its_dispatch_type() {
        let mut store = Store::new(ScheduleState::default());
        let args = EditArgs {
            end: Some("10:00".into()),
            ..Default::default()
        };
        let err = edit::run(&mut store, "monday", "09:30", args).unwrap_err();
        assert!(err.downcast_ref::<DispatchError>().is_some());
    }

    #[test]
    fn out_of_range_move_keeps_its_dispatch_type() {
        let mut store = Store::new(ScheduleState::default());
        let err = mv::run(&mut store, "friday", 1, 2).unwrap_err();
        assert!(err.downcast_ref::<DispatchError>().is_some());
    }
}
