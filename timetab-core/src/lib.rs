//! Core library for timetab.
//!
//! This crate holds everything the CLI (or any other front end) needs to
//! manage a weekly class schedule:
//! - the schedule data model (`day`, `time`, `class`, `schedule`)
//! - the conflict engine (`conflict`) — overlap and adjacency detection,
//!   plus form validation
//! - the undo/redo history store (`history`)
//! - course color assignment (`colors`)
//! - the state holder (`store`) and its persistence (`persist`, `export`)

pub mod class;
pub mod colors;
pub mod config;
pub mod conflict;
pub mod day;
pub mod error;
pub mod export;
pub mod history;
pub mod persist;
pub mod schedule;
pub mod stats;
pub mod store;
pub mod time;

pub use class::{ClassItem, ClassKind};
pub use conflict::{ConflictKind, TimeConflict, ValidationError, detect_conflicts, validate};
pub use day::Day;
pub use error::{TimetabError, TimetabResult};
pub use history::History;
pub use schedule::WeekSchedule;
pub use store::{Action, Store, View};
pub use time::TimeRange;
