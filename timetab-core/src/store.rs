//! The schedule state holder.
//!
//! Front ends do not scatter schedule/history/color state across ambient
//! globals; a `Store` owns all of it and is mutated only through
//! [`Store::dispatch`]. Every successful schedule mutation validates first,
//! then produces a whole new snapshot, records it in history, re-runs color
//! assignment and notifies the registered observers — which is where the
//! persistence side effect lives, keeping the core free of any storage API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::class::ClassItem;
use crate::colors::{self, CourseColorMap};
use crate::conflict::{TimeConflict, ValidationError, validate};
use crate::day::Day;
use crate::error::TimetabError;
use crate::history::History;
use crate::schedule::WeekSchedule;
use crate::time::TimeRange;

/// Which view the front end shows. Persisted alongside the schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Day,
    #[default]
    Week,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Day => f.write_str("day"),
            View::Week => f.write_str("week"),
        }
    }
}

impl FromStr for View {
    type Err = TimetabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(View::Day),
            "week" => Ok(View::Week),
            other => Err(TimetabError::Config(format!(
                "Unknown view '{other}'. Expected day or week"
            ))),
        }
    }
}

/// View preferences, one persisted file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default)]
    pub view: View,
    #[serde(default = "default_selected_day", rename = "selectedDay")]
    pub selected_day: Day,
}

fn default_selected_day() -> Day {
    Day::Monday
}

impl Default for Prefs {
    fn default() -> Self {
        Prefs {
            view: View::Week,
            selected_day: Day::Monday,
        }
    }
}

/// Everything observers see: the current schedule plus its satellite state.
#[derive(Debug, Clone)]
pub struct ScheduleState {
    pub schedule: WeekSchedule,
    pub colors: CourseColorMap,
    pub prefs: Prefs,
}

impl Default for ScheduleState {
    /// First-run state: the starter schedule, no colors assigned yet.
    fn default() -> Self {
        ScheduleState {
            schedule: WeekSchedule::starter(),
            colors: CourseColorMap::new(),
            prefs: Prefs::default(),
        }
    }
}

/// A state mutation. Add/Edit are validated; the rest always apply.
#[derive(Debug, Clone)]
pub enum Action {
    Add {
        day: Day,
        class: ClassItem,
    },
    Edit {
        day: Day,
        original_time: TimeRange,
        class: ClassItem,
    },
    Remove {
        day: Day,
        time: TimeRange,
    },
    /// Reorder a class within its day — the drag-and-drop counterpart.
    Move {
        day: Day,
        from: usize,
        to: usize,
    },
    Undo,
    Redo,
    SetView(View),
    SelectDay(Day),
    SetColor {
        course: String,
        color: String,
    },
}

/// Why a dispatch was refused. All recoverable; the store is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No class at {time} on {day}")]
    NotFound { day: Day, time: TimeRange },

    #[error("No class at position {index} on {day}")]
    OutOfRange { day: Day, index: usize },

    #[error("'{0}' is not one of the palette colors")]
    UnknownColor(String),
}

type Observer = Box<dyn Fn(&ScheduleState)>;

pub struct Store {
    state: ScheduleState,
    history: History,
    observers: Vec<Observer>,
}

impl Store {
    /// Build a store around loaded (or default) state. History starts with
    /// the loaded schedule as its only snapshot; colors are assigned for any
    /// course that arrived without one.
    pub fn new(mut state: ScheduleState) -> Self {
        colors::assign_missing(&state.schedule, &mut state.colors);
        let history = History::new(state.schedule.clone());
        Store {
            state,
            history,
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> &ScheduleState {
        &self.state
    }

    pub fn schedule(&self) -> &WeekSchedule {
        &self.state.schedule
    }

    pub fn colors(&self) -> &CourseColorMap {
        &self.state.colors
    }

    pub fn prefs(&self) -> Prefs {
        self.state.prefs
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Register a change observer. Called after every applied action with the
    /// new state; the usual observer persists the state somewhere.
    pub fn on_change(&mut self, observer: impl Fn(&ScheduleState) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Apply one action. Returns the non-blocking adjacency warnings from
    /// validation (empty for actions that don't validate).
    pub fn dispatch(&mut self, action: Action) -> Result<Vec<TimeConflict>, DispatchError> {
        match action {
            Action::Add { day, class } => {
                let warnings =
                    validate(day, class.time.start, class.time.end, &self.state.schedule, None)?;
                let mut next = self.state.schedule.clone();
                next.push(day, class);
                self.commit(next);
                Ok(warnings)
            }
            Action::Edit {
                day,
                original_time,
                class,
            } => {
                let editing = self
                    .state
                    .schedule
                    .find(day, original_time)
                    .cloned()
                    .ok_or(DispatchError::NotFound {
                        day,
                        time: original_time,
                    })?;
                let warnings = validate(
                    day,
                    class.time.start,
                    class.time.end,
                    &self.state.schedule,
                    Some(&editing),
                )?;
                let mut next = self.state.schedule.clone();
                next.replace(day, original_time, class);
                self.commit(next);
                Ok(warnings)
            }
            Action::Remove { day, time } => {
                let mut next = self.state.schedule.clone();
                if next.remove(day, time).is_none() {
                    return Err(DispatchError::NotFound { day, time });
                }
                self.commit(next);
                Ok(Vec::new())
            }
            Action::Move { day, from, to } => {
                let len = self.state.schedule.day(day).len();
                if from >= len {
                    return Err(DispatchError::OutOfRange { day, index: from });
                }
                if to >= len {
                    return Err(DispatchError::OutOfRange { day, index: to });
                }
                let mut next = self.state.schedule.clone();
                if next.reorder(day, from, to) {
                    self.commit(next);
                }
                Ok(Vec::new())
            }
            Action::Undo => {
                self.state.schedule = self.history.undo().clone();
                self.after_schedule_change();
                Ok(Vec::new())
            }
            Action::Redo => {
                self.state.schedule = self.history.redo().clone();
                self.after_schedule_change();
                Ok(Vec::new())
            }
            Action::SetView(view) => {
                self.state.prefs.view = view;
                self.notify();
                Ok(Vec::new())
            }
            Action::SelectDay(day) => {
                self.state.prefs.selected_day = day;
                self.notify();
                Ok(Vec::new())
            }
            Action::SetColor { course, color } => {
                if !colors::is_palette_color(&color) {
                    return Err(DispatchError::UnknownColor(color));
                }
                self.state.colors.insert(course, color);
                self.notify();
                Ok(Vec::new())
            }
        }
    }

    /// Record a fresh snapshot and make it current.
    fn commit(&mut self, next: WeekSchedule) {
        self.history.record(next.clone());
        self.state.schedule = next;
        self.after_schedule_change();
    }

    fn after_schedule_change(&mut self) {
        colors::assign_missing(&self.state.schedule, &mut self.state.colors);
        self.notify();
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn class(name: &str, time: &str) -> ClassItem {
        ClassItem::new(name, time.parse().unwrap())
    }

    fn empty_store() -> Store {
        Store::new(ScheduleState {
            schedule: WeekSchedule::empty(),
            colors: CourseColorMap::new(),
            prefs: Prefs::default(),
        })
    }

    #[test]
    fn add_records_history_and_assigns_color() {
        let mut store = empty_store();
        let warnings = store
            .dispatch(Action::Add {
                day: Day::Monday,
                class: class("DESIGN", "09:30 - 12:30"),
            })
            .unwrap();
        assert!(warnings.is_empty());
        assert_eq!(store.schedule().day(Day::Monday).len(), 1);
        assert!(store.can_undo());
        assert!(store.colors().contains_key("DESIGN"));
    }

    #[test]
    fn rejected_add_leaves_store_untouched() {
        let mut store = empty_store();
        store
            .dispatch(Action::Add {
                day: Day::Monday,
                class: class("DESIGN", "09:30 - 12:30"),
            })
            .unwrap();

        let err = store
            .dispatch(Action::Add {
                day: Day::Monday,
                class: class("CLASH", "11:00 - 13:00"),
            })
            .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Validation(ValidationError::Conflict { .. })
        ));
        assert_eq!(store.schedule().day(Day::Monday).len(), 1);
        assert!(!store.colors().contains_key("CLASH"));
    }

    #[test]
    fn adjacency_warning_does_not_block() {
        let mut store = empty_store();
        store
            .dispatch(Action::Add {
                day: Day::Monday,
                class: class("DESIGN", "09:30 - 12:30"),
            })
            .unwrap();
        let warnings = store
            .dispatch(Action::Add {
                day: Day::Monday,
                class: class("NEXT", "12:35 - 14:00"),
            })
            .unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(store.schedule().day(Day::Monday).len(), 2);
    }

    #[test]
    fn edit_keeps_its_own_slot_available() {
        let mut store = empty_store();
        store
            .dispatch(Action::Add {
                day: Day::Monday,
                class: class("DESIGN", "09:30 - 12:30"),
            })
            .unwrap();

        // unchanged time, edited location
        let mut edited = class("DESIGN", "09:30 - 12:30");
        edited.location = Some("R.3.1".into());
        store
            .dispatch(Action::Edit {
                day: Day::Monday,
                original_time: "09:30 - 12:30".parse().unwrap(),
                class: edited,
            })
            .unwrap();
        let item = store
            .schedule()
            .find(Day::Monday, "09:30 - 12:30".parse().unwrap())
            .unwrap();
        assert_eq!(item.location.as_deref(), Some("R.3.1"));
    }

    #[test]
    fn edit_missing_slot_is_not_found() {
        let mut store = empty_store();
        let err = store
            .dispatch(Action::Edit {
                day: Day::Monday,
                original_time: "09:30 - 12:30".parse().unwrap(),
                class: class("DESIGN", "09:30 - 12:30"),
            })
            .unwrap_err();
        assert!(matches!(err, DispatchError::NotFound { .. }));
    }

    #[test]
    fn undo_redo_roundtrip() {
        let mut store = empty_store();
        store
            .dispatch(Action::Add {
                day: Day::Monday,
                class: class("DESIGN", "09:30 - 12:30"),
            })
            .unwrap();
        store.dispatch(Action::Undo).unwrap();
        assert!(store.schedule().day(Day::Monday).is_empty());
        assert!(store.can_redo());
        store.dispatch(Action::Redo).unwrap();
        assert_eq!(store.schedule().day(Day::Monday).len(), 1);
    }

    #[test]
    fn edit_after_undo_discards_redo() {
        let mut store = empty_store();
        store
            .dispatch(Action::Add {
                day: Day::Monday,
                class: class("A", "08:00 - 09:00"),
            })
            .unwrap();
        store
            .dispatch(Action::Add {
                day: Day::Tuesday,
                class: class("B", "08:00 - 09:00"),
            })
            .unwrap();
        store.dispatch(Action::Undo).unwrap();
        store
            .dispatch(Action::Add {
                day: Day::Wednesday,
                class: class("C", "08:00 - 09:00"),
            })
            .unwrap();
        assert!(!store.can_redo());
        assert!(store.schedule().day(Day::Tuesday).is_empty());
        assert_eq!(store.schedule().day(Day::Wednesday).len(), 1);
    }

    #[test]
    fn undo_keeps_colors() {
        let mut store = empty_store();
        store
            .dispatch(Action::Add {
                day: Day::Monday,
                class: class("DESIGN", "09:30 - 12:30"),
            })
            .unwrap();
        store.dispatch(Action::Undo).unwrap();
        // the course is gone from the schedule but not from the color map
        assert!(store.colors().contains_key("DESIGN"));
    }

    #[test]
    fn move_reorders_and_records() {
        let mut store = empty_store();
        store
            .dispatch(Action::Add {
                day: Day::Monday,
                class: class("A", "08:00 - 09:00"),
            })
            .unwrap();
        store
            .dispatch(Action::Add {
                day: Day::Monday,
                class: class("B", "10:00 - 11:00"),
            })
            .unwrap();

        store
            .dispatch(Action::Move {
                day: Day::Monday,
                from: 0,
                to: 1,
            })
            .unwrap();
        assert_eq!(store.schedule().day(Day::Monday)[0].name, "B");

        store.dispatch(Action::Undo).unwrap();
        assert_eq!(store.schedule().day(Day::Monday)[0].name, "A");

        let err = store
            .dispatch(Action::Move {
                day: Day::Monday,
                from: 5,
                to: 0,
            })
            .unwrap_err();
        assert!(matches!(err, DispatchError::OutOfRange { .. }));
    }

    #[test]
    fn set_color_override() {
        let mut store = empty_store();
        store
            .dispatch(Action::Add {
                day: Day::Monday,
                class: class("DESIGN", "09:30 - 12:30"),
            })
            .unwrap();
        store
            .dispatch(Action::SetColor {
                course: "DESIGN".into(),
                color: "#60A5FA".into(),
            })
            .unwrap();
        assert_eq!(store.colors()["DESIGN"], "#60A5FA");

        let err = store
            .dispatch(Action::SetColor {
                course: "DESIGN".into(),
                color: "#123456".into(),
            })
            .unwrap_err();
        assert_eq!(err, DispatchError::UnknownColor("#123456".into()));
    }

    #[test]
    fn observers_run_after_every_applied_action() {
        let mut store = empty_store();
        let calls = Rc::new(RefCell::new(0));
        let seen = Rc::clone(&calls);
        store.on_change(move |_state| *seen.borrow_mut() += 1);

        store
            .dispatch(Action::Add {
                day: Day::Monday,
                class: class("DESIGN", "09:30 - 12:30"),
            })
            .unwrap();
        store.dispatch(Action::SetView(View::Day)).unwrap();
        store.dispatch(Action::SelectDay(Day::Friday)).unwrap();
        assert_eq!(*calls.borrow(), 3);

        // refused actions don't notify
        let _ = store.dispatch(Action::Remove {
            day: Day::Friday,
            time: "09:00 - 10:00".parse().unwrap(),
        });
        assert_eq!(*calls.borrow(), 3);
    }
}
