//! Terminal rendering for timetab types.
//!
//! Extension trait adding colored output on top of the core types, with
//! course colors mapped from their palette hex to truecolor.

use owo_colors::{DynColors, OwoColorize};
use timetab_core::class::{ClassItem, ClassKind};
use timetab_core::colors::CourseColorMap;
use timetab_core::day::Day;
use timetab_core::schedule::WeekSchedule;

/// Parse `#RRGGBB` into a terminal color. Unknown input falls back to white.
pub fn hex_color(hex: &str) -> DynColors {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return DynColors::Rgb(255, 255, 255);
    }
    match (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => DynColors::Rgb(r, g, b),
        _ => DynColors::Rgb(255, 255, 255),
    }
}

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self, colors: &CourseColorMap) -> String;
}

impl Render for ClassItem {
    fn render(&self, colors: &CourseColorMap) -> String {
        let color = colors
            .get(&self.name)
            .map(|hex| hex_color(hex))
            .unwrap_or(DynColors::Rgb(255, 255, 255));

        let mut line = format!(
            "{} {}",
            self.time.to_string().dimmed(),
            self.name.color(color).bold()
        );
        if self.kind != ClassKind::Lecture {
            line.push_str(&format!(" [{}]", self.kind).dimmed().to_string());
        }
        if let Some(location) = &self.location {
            line.push_str(&format!(" @ {location}"));
        }
        if let Some(instructor) = &self.instructor {
            line.push_str(&format!(" ({instructor})").dimmed().to_string());
        }
        line
    }
}

/// Render one day: header plus classes sorted by start time.
pub fn render_day(schedule: &WeekSchedule, day: Day, colors: &CourseColorMap) -> String {
    let mut lines = vec![day.name().bold().underline().to_string()];

    let classes = schedule.sorted_day(day);
    if classes.is_empty() {
        lines.push(format!("   {}", "No classes".dimmed()));
    } else {
        for class in classes {
            lines.push(format!("   {}", class.render(colors)));
            if let Some(notes) = &class.notes {
                lines.push(format!("      {}", notes.dimmed()));
            }
        }
    }

    lines.join("\n")
}

/// Render the whole week in day order.
pub fn render_week(schedule: &WeekSchedule, colors: &CourseColorMap) -> String {
    Day::ALL
        .iter()
        .map(|day| render_day(schedule, *day, colors))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parses_palette_colors() {
        assert_eq!(hex_color("#F87171"), DynColors::Rgb(0xF8, 0x71, 0x71));
        assert_eq!(hex_color("#10B981"), DynColors::Rgb(0x10, 0xB9, 0x81));
    }

    #[test]
    fn bad_hex_falls_back_to_white() {
        assert_eq!(hex_color("red"), DynColors::Rgb(255, 255, 255));
        assert_eq!(hex_color("#12"), DynColors::Rgb(255, 255, 255));
        assert_eq!(hex_color("#GGGGGG"), DynColors::Rgb(255, 255, 255));
    }

    #[test]
    fn week_render_mentions_every_day() {
        let out = render_week(&WeekSchedule::starter(), &CourseColorMap::new());
        for day in Day::ALL {
            assert!(out.contains(day.name()));
        }
        assert!(out.contains("No classes")); // Friday and Saturday
        assert!(out.contains("INTERIOR DESIGN 2"));
    }
}
