//! The interval conflict engine.
//!
//! Pure functions over one day's list of time slots: classify how a proposed
//! slot relates to every existing class (blocking overlap vs. informational
//! adjacency) and validate a whole add/edit form submission. Nothing in here
//! mutates a schedule or touches history — callers act on the results.

use thiserror::Error;

use crate::class::ClassItem;
use crate::day::Day;
use crate::schedule::WeekSchedule;
use crate::time::Minutes;

/// Classes closer together than this many minutes get an adjacency warning.
pub const MIN_GAP_MINUTES: Minutes = 15;

/// Classes shorter than this are rejected.
pub const MIN_DURATION_MINUTES: Minutes = 60;

/// How a proposed slot relates to an existing class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    /// The slots share at least one minute. Blocks the edit.
    Overlap,
    /// Disjoint but separated by less than [`MIN_GAP_MINUTES`]. Warning only.
    Adjacent,
}

/// One detected conflict against one existing class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeConflict {
    pub existing: ClassItem,
    pub kind: ConflictKind,
    pub message: String,
}

impl TimeConflict {
    pub fn is_overlap(&self) -> bool {
        self.kind == ConflictKind::Overlap
    }
}

/// Why a form submission was rejected. These are recoverable, user-facing
/// results — the caller re-prompts with the message attached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Class duration must be at least 1 hour")]
    Duration,

    #[error("Start time must be before end time")]
    Order,

    #[error("Schedule conflicts detected")]
    Conflict {
        /// The full conflict list; adjacency entries ride along as auxiliary
        /// data next to the blocking overlaps.
        conflicts: Vec<TimeConflict>,
    },
}

/// Classify the proposed `[start, end)` slot against every class already on
/// `day`.
///
/// When `editing` is given, the existing entry whose slot equals the editing
/// entry's slot is skipped — that is the entry being modified in place, and it
/// must never conflict with itself, even if the proposed time is unchanged.
///
/// Overlap and adjacency are independent classifications; a slot that overlaps
/// an existing class and sits within the minimum gap of it yields both.
pub fn detect_conflicts(
    day: Day,
    start: Minutes,
    end: Minutes,
    schedule: &WeekSchedule,
    editing: Option<&ClassItem>,
) -> Vec<TimeConflict> {
    let mut conflicts = Vec::new();

    for existing in schedule.day(day) {
        if let Some(editing) = editing
            && existing.time == editing.time
        {
            continue;
        }

        let ex = existing.time;

        // Direct overlap: start inside [ex.start, ex.end), end inside
        // (ex.start, ex.end], or the proposed slot swallows the existing one.
        if (start >= ex.start && start < ex.end)
            || (end > ex.start && end <= ex.end)
            || (start <= ex.start && end >= ex.end)
        {
            conflicts.push(TimeConflict {
                existing: existing.clone(),
                kind: ConflictKind::Overlap,
                message: format!("Conflicts with {} ({})", existing.name, existing.time),
            });
        }

        if (start - ex.end).abs() < MIN_GAP_MINUTES || (end - ex.start).abs() < MIN_GAP_MINUTES {
            conflicts.push(TimeConflict {
                existing: existing.clone(),
                kind: ConflictKind::Adjacent,
                message: format!(
                    "Less than {} minutes gap with {}",
                    MIN_GAP_MINUTES, existing.name
                ),
            });
        }
    }

    conflicts
}

/// Validate a proposed add/edit of `[start, end)` on `day`.
///
/// Returns the non-blocking adjacency warnings on success. The duration check
/// runs first, so a reversed range reports the duration message — matching
/// the form behavior users already know.
pub fn validate(
    day: Day,
    start: Minutes,
    end: Minutes,
    schedule: &WeekSchedule,
    editing: Option<&ClassItem>,
) -> Result<Vec<TimeConflict>, ValidationError> {
    if end - start < MIN_DURATION_MINUTES {
        return Err(ValidationError::Duration);
    }
    if start >= end {
        return Err(ValidationError::Order);
    }

    let conflicts = detect_conflicts(day, start, end, schedule, editing);
    if conflicts.iter().any(TimeConflict::is_overlap) {
        return Err(ValidationError::Conflict { conflicts });
    }

    Ok(conflicts)
}
