//! The weekly schedule.
//!
//! A `WeekSchedule` maps every one of the six days to its list of classes.
//! All six keys are always present — an empty day is an empty list, never a
//! missing entry. Lists keep insertion order in storage; display ordering
//! (by start time) is a view, see [`WeekSchedule::sorted_day`].

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::class::ClassItem;
use crate::day::Day;
use crate::time::TimeRange;

/// A full week of classes. Cheap to clone; the history store and the state
/// holder treat values of this type as immutable snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeekSchedule {
    days: BTreeMap<Day, Vec<ClassItem>>,
}

impl Default for WeekSchedule {
    fn default() -> Self {
        Self::empty()
    }
}

impl WeekSchedule {
    /// A schedule with all six days present and no classes.
    pub fn empty() -> Self {
        let days = Day::ALL.iter().map(|d| (*d, Vec::new())).collect();
        WeekSchedule { days }
    }

    /// Normalize an arbitrary day map: keep known days, fill missing ones.
    pub fn from_map(map: BTreeMap<Day, Vec<ClassItem>>) -> Self {
        let mut schedule = Self::empty();
        for (day, classes) in map {
            schedule.days.insert(day, classes);
        }
        schedule
    }

    /// The built-in starter schedule, used when nothing has been persisted yet.
    pub fn starter() -> Self {
        fn class(name: &str, time: &str, location: &str) -> ClassItem {
            let mut item = ClassItem::new(name, time.parse().expect("starter time"));
            item.location = Some(location.to_string());
            item
        }

        let mut schedule = Self::empty();
        schedule.days.insert(
            Day::Monday,
            vec![
                class("INTERIOR DESIGN 2", "09:30 - 12:30", "R.3.1"),
                class("BASIC OF DIGITAL INTERIOR", "12:30 - 15:30", "LAB.KOMPUTER"),
                class("BASIC OF INTERIOR CONSTRUCTION", "15:30 - 18:30", "R.3.2"),
            ],
        );
        schedule.days.insert(
            Day::Tuesday,
            vec![
                class("INTERIOR DESIGN METHODOLOGY", "10:30 - 12:30", "R.3.3"),
                class("NON-SEATING FURNITURE DESIGN", "13:30 - 17:30", "STUDIO"),
            ],
        );
        schedule.days.insert(
            Day::Wednesday,
            vec![
                class("INTERIOR DESIGN 2", "09:30 - 11:30", "R.3.1"),
                class("UNIVERSAL DESIGN AND ERGONOMY", "13:30 - 16:30", "R.3.4"),
            ],
        );
        schedule
            .days
            .insert(Day::Thursday, vec![class("CIVICS", "10:30 - 12:30", "R.3.5")]);
        schedule
    }

    /// Classes for one day, in insertion order.
    pub fn day(&self, day: Day) -> &[ClassItem] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Classes for one day, sorted by start time for display.
    pub fn sorted_day(&self, day: Day) -> Vec<&ClassItem> {
        let mut classes: Vec<&ClassItem> = self.day(day).iter().collect();
        classes.sort_by_key(|c| c.time.start);
        classes
    }

    /// Iterate `(day, classes)` in week order.
    pub fn iter(&self) -> impl Iterator<Item = (Day, &[ClassItem])> {
        Day::ALL.iter().map(move |d| (*d, self.day(*d)))
    }

    /// Every class on the schedule, any day.
    pub fn all_classes(&self) -> impl Iterator<Item = &ClassItem> {
        self.days.values().flatten()
    }

    /// Distinct course names currently on the schedule.
    pub fn course_names(&self) -> BTreeSet<&str> {
        self.all_classes().map(|c| c.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.all_classes().next().is_none()
    }

    pub fn push(&mut self, day: Day, class: ClassItem) {
        self.days.entry(day).or_default().push(class);
    }

    /// Find a class by its time slot. Slots are unique within a day because
    /// overlapping entries are rejected at validation time.
    pub fn find(&self, day: Day, time: TimeRange) -> Option<&ClassItem> {
        self.day(day).iter().find(|c| c.time == time)
    }

    /// Remove the class at `time`, preserving the order of the rest.
    pub fn remove(&mut self, day: Day, time: TimeRange) -> Option<ClassItem> {
        let classes = self.days.get_mut(&day)?;
        let pos = classes.iter().position(|c| c.time == time)?;
        Some(classes.remove(pos))
    }

    /// Replace the class at `original_time` with `class`, in place.
    pub fn replace(&mut self, day: Day, original_time: TimeRange, class: ClassItem) -> bool {
        let Some(classes) = self.days.get_mut(&day) else {
            return false;
        };
        match classes.iter_mut().find(|c| c.time == original_time) {
            Some(slot) => {
                *slot = class;
                true
            }
            None => false,
        }
    }

    /// Move a class within its day (drag-reorder). Out-of-range indices are a
    /// no-op; returns whether anything moved.
    pub fn reorder(&mut self, day: Day, from: usize, to: usize) -> bool {
        let Some(classes) = self.days.get_mut(&day) else {
            return false;
        };
        if from >= classes.len() || to >= classes.len() || from == to {
            return false;
        }
        let item = classes.remove(from);
        classes.insert(to, item);
        true
    }
}

// Tolerant deserialization: unknown values fail, but missing days are filled
// in so older or hand-edited files keep loading.
impl<'de> Deserialize<'de> for WeekSchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<Day, Vec<ClassItem>>::deserialize(deserializer)?;
        Ok(WeekSchedule::from_map(map))
    }
}
