use anyhow::Result;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use timetab_core::class::{ClassItem, ClassKind};
use timetab_core::day::Day;
use timetab_core::store::{Action, Store};
use timetab_core::time::TimeRange;

use super::{print_dispatch_error, print_warnings};

/// Flag values from the command line; anything missing is prompted for.
#[derive(Default)]
pub struct AddArgs {
    pub day: Option<String>,
    pub name: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub kind: Option<String>,
    pub location: Option<String>,
    pub instructor: Option<String>,
    pub notes: Option<String>,
}

pub fn run(store: &mut Store, args: AddArgs) -> Result<()> {
    let interactive =
        args.day.is_none() || args.name.is_none() || args.start.is_none() || args.end.is_none();

    // --- Day ---
    let day = match &args.day {
        Some(d) => d.parse()?,
        None => prompt_day(store.prefs().selected_day)?,
    };

    // --- Course name ---
    let name = match args.name {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("  Course name")
            .interact_text()?,
    };

    // --- Type ---
    let kind = match &args.kind {
        Some(k) => k.parse()?,
        None if interactive => prompt_kind()?,
        None => ClassKind::default(),
    };

    // --- Location ---
    let location = optional_field(args.location, interactive, "  Room? (skip)")?;
    let instructor = optional_field(args.instructor, interactive, "  Instructor? (skip)")?;
    let notes = args.notes.filter(|n| !n.is_empty());

    // --- Time, validated against the day's schedule ---
    let flag_time = match (&args.start, &args.end) {
        (Some(start), Some(end)) => Some(TimeRange::from_parts(start, end)?),
        _ => None,
    };

    loop {
        let time = match flag_time {
            Some(t) => t,
            None => prompt_time_range()?,
        };

        let mut class = ClassItem::new(name.clone(), time);
        class.kind = kind;
        class.location = location.clone();
        class.instructor = instructor.clone();
        class.notes = notes.clone();

        match store.dispatch(Action::Add { day, class }) {
            Ok(warnings) => {
                print_warnings(&warnings);
                println!(
                    "{}",
                    format!("  Added: {name} ({time}, {day})").green()
                );
                return Ok(());
            }
            Err(e) => {
                if flag_time.is_some() {
                    return Err(e.into());
                }
                print_dispatch_error(&e);
                // interactive: ask for a new time slot
            }
        }
    }
}

/// Prompt for a day, defaulting to the remembered selected day.
pub fn prompt_day(default: Day) -> Result<Day> {
    let names: Vec<&str> = Day::ALL.iter().map(|d| d.name()).collect();
    let default_index = Day::ALL.iter().position(|d| *d == default).unwrap_or(0);
    let choice = Select::new()
        .with_prompt("  Day")
        .items(&names)
        .default(default_index)
        .interact()?;
    Ok(Day::ALL[choice])
}

fn prompt_kind() -> Result<ClassKind> {
    let kinds = [ClassKind::Lecture, ClassKind::Lab, ClassKind::Studio];
    let names: Vec<String> = kinds.iter().map(|k| k.to_string()).collect();
    let choice = Select::new()
        .with_prompt("  Type")
        .items(&names)
        .default(0)
        .interact()?;
    Ok(kinds[choice])
}

/// Prompt for start and end, retrying on parse errors.
pub fn prompt_time_range() -> Result<TimeRange> {
    let start = prompt_time("  Start (HH:MM)")?;
    let end = prompt_time("  End (HH:MM)")?;
    Ok(TimeRange::new(start, end))
}

fn prompt_time(prompt: &str) -> Result<timetab_core::time::Minutes> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match timetab_core::time::to_minutes(&input) {
            Ok(minutes) => return Ok(minutes),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// A flag wins; otherwise prompt when interactive. Empty input means none.
fn optional_field(
    flag: Option<String>,
    interactive: bool,
    prompt: &str,
) -> Result<Option<String>> {
    if let Some(value) = flag {
        return Ok(if value.is_empty() { None } else { Some(value) });
    }
    if !interactive {
        return Ok(None);
    }
    let value: String = Input::new()
        .with_prompt(prompt)
        .default(String::new())
        .show_default(false)
        .interact_text()?;
    Ok(if value.is_empty() { None } else { Some(value) })
}
