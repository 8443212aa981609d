//! Class entry types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimetabError;
use crate::time::TimeRange;

/// What kind of session a class is. Lowercase in JSON; missing means lecture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    #[default]
    Lecture,
    Lab,
    Studio,
}

impl ClassKind {
    fn is_default(&self) -> bool {
        *self == ClassKind::Lecture
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassKind::Lecture => f.write_str("lecture"),
            ClassKind::Lab => f.write_str("lab"),
            ClassKind::Studio => f.write_str("studio"),
        }
    }
}

impl FromStr for ClassKind {
    type Err = TimetabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lecture" => Ok(ClassKind::Lecture),
            "lab" => Ok(ClassKind::Lab),
            "studio" => Ok(ClassKind::Studio),
            other => Err(TimetabError::Config(format!(
                "Unknown class type '{other}'. Expected lecture, lab or studio"
            ))),
        }
    }
}

/// One entry on the weekly schedule.
///
/// Entries have no separate identity: within a day, the time slot is unique
/// (overlaps are rejected at validation time), so day + time identifies an
/// entry. Field names match the persisted JSON from the start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassItem {
    pub name: String,

    /// The time slot, `"HH:MM - HH:MM"` on the wire.
    pub time: TimeRange,

    #[serde(rename = "type", default, skip_serializing_if = "ClassKind::is_default")]
    pub kind: ClassKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ClassItem {
    pub fn new(name: impl Into<String>, time: TimeRange) -> Self {
        ClassItem {
            name: name.into(),
            time,
            kind: ClassKind::default(),
            location: None,
            instructor: None,
            notes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_type_is_lecture() {
        let json = r#"{ "name": "CIVICS", "time": "10:30 - 12:30", "location": "R.3.5" }"#;
        let item: ClassItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, ClassKind::Lecture);
        assert_eq!(item.location.as_deref(), Some("R.3.5"));
        assert_eq!(item.instructor, None);
    }

    #[test]
    fn wire_format_is_stable() {
        let mut item = ClassItem::new("STUDIO 1", "13:30 - 17:30".parse().unwrap());
        item.kind = ClassKind::Studio;
        item.location = Some("STUDIO".into());

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "STUDIO 1",
                "time": "13:30 - 17:30",
                "type": "studio",
                "location": "STUDIO"
            })
        );
    }

    #[test]
    fn lecture_type_is_omitted_on_output() {
        let item = ClassItem::new("CIVICS", "10:30 - 12:30".parse().unwrap());
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("type").is_none());
    }

    #[test]
    fn kind_parse() {
        assert_eq!("Lab".parse::<ClassKind>().unwrap(), ClassKind::Lab);
        assert!("seminar".parse::<ClassKind>().is_err());
    }
}
