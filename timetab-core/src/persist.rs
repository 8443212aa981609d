//! Local state persistence.
//!
//! The state directory holds one JSON file per piece of state:
//! `schedule.json`, `course-colors.json` and `prefs.json`. Loads are
//! tolerant — a missing or malformed file silently falls back to its default
//! (there is no versioning or migration). Saves go through a temp file and
//! rename so a crash never leaves a half-written file behind.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::colors::CourseColorMap;
use crate::error::{TimetabError, TimetabResult};
use crate::schedule::WeekSchedule;
use crate::store::{Prefs, ScheduleState};

const SCHEDULE_FILE: &str = "schedule.json";
const COLORS_FILE: &str = "course-colors.json";
const PREFS_FILE: &str = "prefs.json";

/// Handle on the state directory.
#[derive(Debug, Clone)]
pub struct StateDir {
    root: PathBuf,
}

impl StateDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        StateDir { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the full state, defaulting every piece that is missing or does
    /// not parse. A first run therefore yields the starter schedule.
    pub fn load(&self) -> ScheduleState {
        ScheduleState {
            schedule: self
                .read_json(SCHEDULE_FILE)
                .unwrap_or_else(WeekSchedule::starter),
            colors: self.read_json(COLORS_FILE).unwrap_or_default(),
            prefs: self.read_json(PREFS_FILE).unwrap_or_default(),
        }
    }

    /// Persist the full state. The first failing write aborts the rest.
    pub fn save(&self, state: &ScheduleState) -> TimetabResult<()> {
        self.save_schedule(&state.schedule)?;
        self.save_colors(&state.colors)?;
        self.save_prefs(&state.prefs)
    }

    pub fn save_schedule(&self, schedule: &WeekSchedule) -> TimetabResult<()> {
        self.write_json(SCHEDULE_FILE, schedule)
    }

    pub fn save_colors(&self, colors: &CourseColorMap) -> TimetabResult<()> {
        self.write_json(COLORS_FILE, colors)
    }

    pub fn save_prefs(&self, prefs: &Prefs) -> TimetabResult<()> {
        self.write_json(PREFS_FILE, prefs)
    }

    fn read_json<T: DeserializeOwned>(&self, file: &str) -> Option<T> {
        let content = std::fs::read_to_string(self.root.join(file)).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn write_json<T: Serialize>(&self, file: &str, value: &T) -> TimetabResult<()> {
        std::fs::create_dir_all(&self.root)?;

        let content = serde_json::to_string_pretty(value)
            .map_err(|e| TimetabError::Serialization(e.to_string()))?;

        let path = self.root.join(file);
        let temp = self.root.join(format!("{file}.tmp"));
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }
}
