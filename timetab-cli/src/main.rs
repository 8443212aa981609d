mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use timetab_core::store::DispatchError;

use commands::add::AddArgs;
use commands::edit::EditArgs;

#[derive(Parser)]
#[command(name = "timetab")]
#[command(about = "Manage your weekly class timetable from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a class (interactive when flags are omitted)
    Add {
        /// Day of the week (e.g. "monday", "tue")
        #[arg(short, long)]
        day: Option<String>,

        /// Course name
        #[arg(short, long)]
        name: Option<String>,

        /// Start time (HH:MM)
        #[arg(short, long)]
        start: Option<String>,

        /// End time (HH:MM)
        #[arg(short, long)]
        end: Option<String>,

        /// Class type: lecture, lab or studio
        #[arg(short = 't', long = "type")]
        kind: Option<String>,

        /// Room or building
        #[arg(short, long)]
        location: Option<String>,

        #[arg(short, long)]
        instructor: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Edit the class starting at a given time
    Edit {
        /// Day of the week
        day: String,

        /// Start time of the class to edit (HH:MM)
        start: String,

        #[arg(long)]
        name: Option<String>,

        /// New start time (HH:MM)
        #[arg(long = "new-start")]
        new_start: Option<String>,

        /// New end time (HH:MM)
        #[arg(long = "new-end")]
        new_end: Option<String>,

        #[arg(short = 't', long = "type")]
        kind: Option<String>,

        /// Room or building (empty string clears it)
        #[arg(short, long)]
        location: Option<String>,

        #[arg(short, long)]
        instructor: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Remove the class starting at a given time
    Remove {
        day: String,

        /// Start time of the class to remove (HH:MM)
        start: String,
    },
    /// Reorder a class within its day (positions as stored, 1-based)
    Move {
        day: String,
        from: usize,
        to: usize,
    },
    /// Show the schedule (week view, or one day with --day)
    Show {
        /// Show a single day and remember it as the selected day
        #[arg(short, long)]
        day: Option<String>,
    },
    /// Interactive session with undo/redo
    Session,
    /// Export the schedule as JSON
    Export {
        /// Output file (default: college-schedule.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show or override course colors
    Color {
        /// Course name (omit to list all assignments)
        course: Option<String>,

        /// Palette color hex (omit to pick interactively)
        color: Option<String>,
    },
    /// Weekly schedule statistics
    Stats,
    /// Show resolved configuration and state paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add {
            day,
            name,
            start,
            end,
            kind,
            location,
            instructor,
            notes,
        } => {
            let mut store = commands::open_store()?;
            commands::add::run(
                &mut store,
                AddArgs {
                    day,
                    name,
                    start,
                    end,
                    kind,
                    location,
                    instructor,
                    notes,
                },
            )
        }
        Commands::Edit {
            day,
            start,
            name,
            new_start,
            new_end,
            kind,
            location,
            instructor,
            notes,
        } => {
            let mut store = commands::open_store()?;
            commands::edit::run(
                &mut store,
                &day,
                &start,
                EditArgs {
                    name,
                    start: new_start,
                    end: new_end,
                    kind,
                    location,
                    instructor,
                    notes,
                },
            )
        }
        Commands::Remove { day, start } => {
            let mut store = commands::open_store()?;
            commands::remove::run(&mut store, &day, &start)
        }
        Commands::Move { day, from, to } => {
            let mut store = commands::open_store()?;
            commands::mv::run(&mut store, &day, from, to)
        }
        Commands::Show { day } => {
            let mut store = commands::open_store()?;
            commands::show::run(&mut store, day.as_deref())
        }
        Commands::Session => {
            let mut store = commands::open_store()?;
            commands::session::run(&mut store)
        }
        Commands::Export { output } => {
            let store = commands::open_store()?;
            commands::export::run(&store, output)
        }
        Commands::Color { course, color } => {
            let mut store = commands::open_store()?;
            commands::color::run(&mut store, course.as_deref(), color.as_deref())
        }
        Commands::Stats => {
            let store = commands::open_store()?;
            commands::stats::run(&store)
        }
        Commands::Config => commands::config::run(),
    };

    // Dispatch refusals carry per-conflict details; print those in full
    // instead of the bare top-level message.
    if let Err(e) = result {
        if let Some(dispatch) = e.downcast_ref::<DispatchError>() {
            commands::print_dispatch_error(dispatch);
            std::process::exit(1);
        }
        return Err(e);
    }
    Ok(())
}
