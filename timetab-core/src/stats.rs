//! Weekly schedule statistics.

use crate::day::Day;
use crate::schedule::WeekSchedule;

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleStats {
    pub total_classes: usize,
    /// Class count per day, in week order.
    pub classes_per_day: Vec<(Day, usize)>,
    /// The day with the most classes (earliest wins ties).
    pub busy_day: (Day, usize),
    /// Sum of class durations in hours, rounded to one decimal.
    pub total_hours: f64,
    /// Average classes per active day (0 when the week is empty).
    pub average_per_day: f64,
    /// Days with at least one class.
    pub active_days: usize,
}

/// Compute the week's headline numbers.
pub fn schedule_stats(schedule: &WeekSchedule) -> ScheduleStats {
    let classes_per_day: Vec<(Day, usize)> = schedule
        .iter()
        .map(|(day, classes)| (day, classes.len()))
        .collect();

    let total_classes: usize = classes_per_day.iter().map(|(_, n)| n).sum();
    let busy_day = classes_per_day
        .iter()
        .copied()
        .max_by_key(|(day, n)| (*n, std::cmp::Reverse(*day)))
        .unwrap_or((Day::Monday, 0));

    let total_hours: f64 = schedule
        .all_classes()
        .map(|c| c.time.duration_hours())
        .sum();

    let active_days = classes_per_day.iter().filter(|(_, n)| *n > 0).count();
    let average_per_day = if active_days > 0 {
        total_classes as f64 / active_days as f64
    } else {
        0.0
    };

    ScheduleStats {
        total_classes,
        classes_per_day,
        busy_day,
        total_hours: (total_hours * 10.0).round() / 10.0,
        average_per_day,
        active_days,
    }
}
