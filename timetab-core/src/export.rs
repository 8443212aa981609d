//! Schedule export.
//!
//! The export file is the only durable artifact that leaves the state
//! directory: the current week as pretty-printed JSON (2-space indent).
//! There is no import path.

use std::path::Path;

use crate::error::{TimetabError, TimetabResult};
use crate::schedule::WeekSchedule;

/// Default export file name.
pub const DEFAULT_EXPORT_FILE: &str = "college-schedule.json";

/// Write `schedule` to `path` as pretty-printed JSON.
pub fn export_schedule(schedule: &WeekSchedule, path: &Path) -> TimetabResult<()> {
    let content = serde_json::to_string_pretty(schedule)
        .map_err(|e| TimetabError::Serialization(e.to_string()))?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILE);
        export_schedule(&WeekSchedule::starter(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        // 2-space indent, day keys at the first level
        assert!(content.starts_with("{\n  \"MONDAY\""));

        let parsed: WeekSchedule = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, WeekSchedule::starter());
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.json");
        assert!(export_schedule(&WeekSchedule::empty(), &path).is_err());
    }
}
