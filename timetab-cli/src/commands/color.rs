use anyhow::Result;
use dialoguer::Select;
use owo_colors::OwoColorize;
use timetab_core::colors::CLASS_COLORS;
use timetab_core::store::{Action, Store};

use crate::render::hex_color;

/// List color assignments, or override one course's color.
pub fn run(store: &mut Store, course: Option<&str>, color: Option<&str>) -> Result<()> {
    let Some(course) = course else {
        return list(store);
    };

    let color = match color {
        Some(c) => c.to_string(),
        None => prompt_palette(course)?,
    };

    store.dispatch(Action::SetColor {
        course: course.to_string(),
        color: color.clone(),
    })?;

    println!(
        "{} {}",
        "●".color(hex_color(&color)),
        format!("{course} is now {color}").green()
    );
    Ok(())
}

fn list(store: &Store) -> Result<()> {
    if store.colors().is_empty() {
        println!("  {}", "No course colors assigned yet".dimmed());
        return Ok(());
    }
    for (course, color) in store.colors() {
        println!("  {} {course} {}", "●".color(hex_color(color)), color.dimmed());
    }
    Ok(())
}

fn prompt_palette(course: &str) -> Result<String> {
    let swatches: Vec<String> = CLASS_COLORS
        .iter()
        .map(|hex| format!("{} {hex}", "●".color(hex_color(hex))))
        .collect();
    let choice = Select::new()
        .with_prompt(format!("  Color for {course}"))
        .items(&swatches)
        .default(0)
        .interact()?;
    Ok(CLASS_COLORS[choice].to_string())
}
