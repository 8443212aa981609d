use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use timetab_core::config::TimetabConfig;

/// Print the resolved configuration and state paths.
pub fn run() -> Result<()> {
    let config = TimetabConfig::load().context("Could not load configuration")?;
    let config_path = TimetabConfig::config_path()?;
    let state_dir = config.state_dir();

    println!("{}", "timetab configuration".bold().underline());
    println!("   Config file: {}", config_path.display());
    println!(
        "   State dir:   {} {}",
        config.display_state_dir().display(),
        if state_dir.root().exists() {
            "".to_string()
        } else {
            "(not created yet)".dimmed().to_string()
        }
    );
    Ok(())
}
