use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::parse_day;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTALS
    //
    for (label, table) in [
        ("Inspections", "inspections"),
        ("Users", "users"),
        ("Log entries", "log"),
    ] {
        let sql = format!("SELECT COUNT(*) FROM {table}");
        let count: i64 = pool.conn.query_row(&sql, [], |row| row.get(0))?;
        println!("{}• {}:{} {}{}{}", CYAN, label, RESET, GREEN, count, RESET);
    }

    //
    // 3) DATE RANGE
    //
    // Day strings are dd/mm/YYYY, so ordering has to happen on parsed dates.
    let mut stmt = pool.conn.prepare("SELECT DISTINCT date FROM inspections")?;
    let mut days: Vec<_> = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .filter_map(|r| r.ok())
        .filter_map(|d| parse_day(&d))
        .collect();
    days.sort();

    let fmt = |d: Option<&chrono::NaiveDate>| {
        d.map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt(days.first()));
    println!("    to:   {}", fmt(days.last()));

    //
    // 4) UNIQUE GUARD
    //
    let unique: Option<String> = pool
        .conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='index' AND name=?1",
            ["idx_inspections_ship_zone_date"],
            |row| row.get(0),
        )
        .optional()?;
    let guard = if unique.is_some() {
        format!("{GREEN}unique index{RESET}")
    } else {
        format!("{YELLOW}check-then-insert only{RESET}")
    };
    println!("{}• Duplicate guard:{} {}", CYAN, RESET, guard);

    println!();
    Ok(())
}
