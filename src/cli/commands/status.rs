use crate::config::Config;
use crate::core::registry::all_pairs;
use crate::core::status::status_board;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::ReviewStatus;
use crate::ui::messages::{header, warning};
use crate::utils::date::resolve_day;

pub fn handle(date: Option<&str>, cfg: &Config) -> AppResult<()> {
    let day = resolve_day(date)?;

    // An unreadable database shows every zone as pending.
    let board = match DbPool::new(&cfg.database) {
        Ok(pool) => status_board(&pool, &day),
        Err(e) => {
            warning(format!("Cannot read inspections ({e}); all zones shown as pending"));
            all_pairs()
                .into_iter()
                .map(|(ship, zone)| (ship, zone, ReviewStatus::NotReviewed))
                .collect()
        }
    };

    header(format!("Inspection status for {day}"));
    println!("{:<22} {:<14} STATUS", "SHIP", "ZONE");
    for (ship, zone, status) in &board {
        println!(
            "{:<22} {:<14} {}",
            ship.name(),
            zone.name(),
            status.colored_label()
        );
    }

    let reviewed = board
        .iter()
        .filter(|(_, _, s)| *s == ReviewStatus::Reviewed)
        .count();
    println!("\n{reviewed}/{} zones reviewed", board.len());

    Ok(())
}
