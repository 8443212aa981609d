use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use timetab_core::day::Day;
use timetab_core::store::{Action, Store};

/// Reorder a class within its day. Positions are 1-based and refer to the
/// stored order (the order `show` lists within a day is sorted by start time,
/// which may differ).
pub fn run(store: &mut Store, day: &str, from: usize, to: usize) -> Result<()> {
    let day: Day = day.parse()?;
    if from == 0 || to == 0 {
        bail!("Positions are 1-based");
    }
    if from == to {
        bail!("Positions are equal; nothing to move");
    }

    store.dispatch(Action::Move {
        day,
        from: from - 1,
        to: to - 1,
    })?;

    println!(
        "{}",
        format!("  Moved class {from} -> {to} on {day}").green()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetab_core::store::ScheduleState;

    #[test]
    fn equal_positions_are_rejected_without_committing() {
        let mut store = Store::new(ScheduleState::default());
        assert!(run(&mut store, "monday", 2, 2).is_err());
        assert!(!store.can_undo());
    }
}
