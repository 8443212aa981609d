use anyhow::{Result, anyhow};
use owo_colors::OwoColorize;
use timetab_core::class::ClassItem;
use timetab_core::day::Day;
use timetab_core::store::{Action, Store};
use timetab_core::time::{self, TimeRange};

use super::print_warnings;

/// New field values; anything `None` keeps the existing value.
#[derive(Default)]
pub struct EditArgs {
    pub name: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub kind: Option<String>,
    pub location: Option<String>,
    pub instructor: Option<String>,
    pub notes: Option<String>,
}

pub fn run(store: &mut Store, day: &str, start: &str, args: EditArgs) -> Result<()> {
    let day: Day = day.parse()?;
    let existing = find_by_start(store, day, start)?;

    let class = apply_args(&existing, args)?;
    let new_time = class.time;

    match store.dispatch(Action::Edit {
        day,
        original_time: existing.time,
        class,
    }) {
        Ok(warnings) => {
            print_warnings(&warnings);
            println!(
                "{}",
                format!("  Updated: {} ({new_time}, {day})", existing.name).green()
            );
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Locate a class on `day` by its start time.
pub fn find_by_start(store: &Store, day: Day, start: &str) -> Result<ClassItem> {
    let start_minutes = time::to_minutes(start)?;
    store
        .schedule()
        .day(day)
        .iter()
        .find(|c| c.time.start == start_minutes)
        .cloned()
        .ok_or_else(|| anyhow!("No class starting at {start} on {day}"))
}

fn apply_args(existing: &ClassItem, args: EditArgs) -> Result<ClassItem> {
    let mut class = existing.clone();

    if let Some(name) = args.name {
        class.name = name;
    }
    if let Some(kind) = args.kind {
        class.kind = kind.parse()?;
    }
    // Empty string clears an optional field; None keeps it.
    if let Some(location) = args.location {
        class.location = if location.is_empty() { None } else { Some(location) };
    }
    if let Some(instructor) = args.instructor {
        class.instructor = if instructor.is_empty() { None } else { Some(instructor) };
    }
    if let Some(notes) = args.notes {
        class.notes = if notes.is_empty() { None } else { Some(notes) };
    }

    let start = match args.start {
        Some(s) => time::to_minutes(&s)?,
        None => existing.time.start,
    };
    let end = match args.end {
        Some(e) => time::to_minutes(&e)?,
        None => existing.time.end,
    };
    class.time = TimeRange::new(start, end);

    Ok(class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetab_core::class::ClassKind;

    fn base() -> ClassItem {
        let mut item = ClassItem::new("DESIGN", "09:30 - 12:30".parse().unwrap());
        item.location = Some("R.3.1".into());
        item
    }

    #[test]
    fn empty_args_keep_everything() {
        let class = apply_args(&base(), EditArgs::default()).unwrap();
        assert_eq!(class, base());
    }

    #[test]
    fn fields_overridden_individually() {
        let args = EditArgs {
            name: Some("DESIGN 2".into()),
            kind: Some("studio".into()),
            end: Some("13:30".into()),
            ..Default::default()
        };
        let class = apply_args(&base(), args).unwrap();
        assert_eq!(class.name, "DESIGN 2");
        assert_eq!(class.kind, ClassKind::Studio);
        assert_eq!(class.time.to_string(), "09:30 - 13:30");
        assert_eq!(class.location.as_deref(), Some("R.3.1"));
    }

    #[test]
    fn empty_string_clears_optional_field() {
        let args = EditArgs {
            location: Some(String::new()),
            ..Default::default()
        };
        let class = apply_args(&base(), args).unwrap();
        assert_eq!(class.location, None);
    }

    #[test]
    fn bad_time_is_an_error() {
        let args = EditArgs {
            start: Some("9am".into()),
            ..Default::default()
        };
        assert!(apply_args(&base(), args).is_err());
    }
}
