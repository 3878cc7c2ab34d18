use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::RecordFilter;
use crate::db::store::InspectionStore;
use crate::errors::AppResult;
use crate::models::{Ship, Zone};
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(
    ship: Option<Ship>,
    zone: Option<Zone>,
    date: Option<&str>,
    cfg: &Config,
) -> AppResult<()> {
    let filter = RecordFilter::from_parts(ship, zone, date)?;
    let pool = DbPool::new(&cfg.database)?;
    let records = pool.query(&filter)?;

    if records.is_empty() {
        info("No inspections found.");
        return Ok(());
    }

    let mut table = Table::with_headers(&[
        "ID", "Date", "Time", "Ship", "Zone", "User", "✓", "✗", "Pest", "Repair", "Photos",
    ]);
    for r in &records {
        table.add_row(vec![
            r.id.map(|id| id.to_string()).unwrap_or_default(),
            r.date.clone(),
            r.time.clone(),
            r.ship.clone(),
            r.zone.clone(),
            r.user.clone(),
            r.conforming_count().to_string(),
            r.non_conforming_count().to_string(),
            r.pest_count().to_string(),
            r.repair_count().to_string(),
            r.photo_count().to_string(),
        ]);
    }

    print!("{}", table.render());
    println!("\n{} inspection(s)", records.len());
    Ok(())
}
