use std::path::PathBuf;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use timetab_core::export::{DEFAULT_EXPORT_FILE, export_schedule};
use timetab_core::store::Store;

pub fn run(store: &Store, output: Option<PathBuf>) -> Result<()> {
    let path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));

    export_schedule(store.schedule(), &path)
        .with_context(|| format!("Could not export to {}", path.display()))?;

    println!("{}", format!("  Exported: {}", path.display()).green());
    Ok(())
}
