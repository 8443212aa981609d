//! Course color assignment.
//!
//! Every distinct course name gets one color from a fixed 9-color palette,
//! picked at random from the colors not yet in use. Once assigned, a color is
//! stable for the session and beyond (the map is persisted) — it only changes
//! when the user overrides it. Mappings are never removed, even when the
//! course disappears from the schedule.

use std::collections::BTreeMap;
use std::collections::HashSet;

use rand::Rng;

use crate::schedule::WeekSchedule;

/// Course name → palette hex color.
pub type CourseColorMap = BTreeMap<String, String>;

/// The fixed palette.
pub const CLASS_COLORS: [&str; 9] = [
    "#F87171", // Red
    "#FB923C", // Orange
    "#F2B134", // Yellow
    "#10B981", // Green
    "#A1CDA8", // Light Green
    "#60A5FA", // Blue
    "#818CF8", // Indigo
    "#A78BFA", // Purple
    "#F472B6", // Pink
];

/// True if `color` is one of the palette colors (case-insensitive).
pub fn is_palette_color(color: &str) -> bool {
    CLASS_COLORS.iter().any(|c| c.eq_ignore_ascii_case(color))
}

/// Pick a color not in `used`; once the palette is exhausted, any palette
/// color (collisions allowed from then on).
fn pick_color<R: Rng>(rng: &mut R, used: &HashSet<&str>) -> &'static str {
    let available: Vec<&'static str> = CLASS_COLORS
        .iter()
        .copied()
        .filter(|c| !used.contains(c))
        .collect();
    if available.is_empty() {
        CLASS_COLORS[rng.gen_range(0..CLASS_COLORS.len())]
    } else {
        available[rng.gen_range(0..available.len())]
    }
}

/// Assign colors to every course on `schedule` that has none yet. Existing
/// assignments are left untouched. Returns whether the map changed.
pub fn assign_missing(schedule: &WeekSchedule, colors: &mut CourseColorMap) -> bool {
    assign_missing_with(&mut rand::thread_rng(), schedule, colors)
}

pub fn assign_missing_with<R: Rng>(
    rng: &mut R,
    schedule: &WeekSchedule,
    colors: &mut CourseColorMap,
) -> bool {
    let mut changed = false;
    for name in schedule.course_names() {
        if colors.contains_key(name) {
            continue;
        }
        let used: HashSet<&str> = colors.values().map(String::as_str).collect();
        let color = pick_color(rng, &used);
        colors.insert(name.to_string(), color.to_string());
        changed = true;
    }
    changed
}
