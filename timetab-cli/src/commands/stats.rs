use anyhow::Result;
use owo_colors::OwoColorize;
use timetab_core::stats::schedule_stats;
use timetab_core::store::Store;

pub fn run(store: &Store) -> Result<()> {
    let stats = schedule_stats(store.schedule());

    println!("{}", "This week".bold().underline());
    println!("   Classes:     {}", stats.total_classes);
    println!("   Hours:       {:.1}", stats.total_hours);
    println!("   Active days: {}", stats.active_days);
    if stats.total_classes > 0 {
        println!("   Avg per day: {:.1}", stats.average_per_day);
        println!(
            "   Busiest:     {} ({} classes)",
            stats.busy_day.0, stats.busy_day.1
        );
    }

    println!();
    for (day, count) in &stats.classes_per_day {
        let bar = "▇".repeat(*count);
        if *count > 0 {
            println!("   {:9} {} {}", day.name(), bar.green(), count);
        } else {
            println!("   {:9} {}", day.name(), "-".dimmed());
        }
    }
    Ok(())
}
