use crate::errors::{AppError, AppResult};
use crate::models::{InspectionRecord, Ship, Zone};
use crate::utils::date::canonical_day;
use chrono::Local;
use rusqlite::types::Type;
use rusqlite::{Connection, Row, ToSql, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Equality filters applied to stored inspections. `None` matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub ship: Option<String>,
    pub zone: Option<String>,
    pub date: Option<String>,
}

impl RecordFilter {
    pub fn triple(ship: &str, zone: &str, date: &str) -> Self {
        Self {
            ship: Some(ship.to_string()),
            zone: Some(zone.to_string()),
            date: Some(date.to_string()),
        }
    }

    /// Filter from CLI options; the day is normalised to the stored form.
    pub fn from_parts(
        ship: Option<Ship>,
        zone: Option<Zone>,
        date: Option<&str>,
    ) -> AppResult<Self> {
        let date = match date {
            Some(raw) => {
                let day = canonical_day(raw);
                Some(day.ok_or_else(|| AppError::InvalidDate(raw.to_string()))?)
            }
            None => None,
        };
        Ok(Self {
            ship: ship.map(|s| s.name().to_string()),
            zone: zone.map(|z| z.name().to_string()),
            date,
        })
    }

    pub fn matches(&self, record: &InspectionRecord) -> bool {
        self.ship.as_deref().is_none_or(|s| s == record.ship)
            && self.zone.as_deref().is_none_or(|z| z == record.zone)
            && self.date.as_deref().is_none_or(|d| d == record.date)
    }
}

fn to_json<T: Serialize>(value: &T) -> rusqlite::Result<String> {
    serde_json::to_string(value)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

fn from_json<T: DeserializeOwned>(row: &Row, col: &str) -> rusqlite::Result<T> {
    let raw: String = row.get(col)?;
    serde_json::from_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))
}

pub fn insert_inspection(conn: &Connection, rec: &InspectionRecord) -> rusqlite::Result<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO inspections
            (ship, zone, user, date, time, conforms, does_not_conform, pest, repair,
             observations, photos, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
    )?;

    stmt.execute(params![
        rec.ship,
        rec.zone,
        rec.user,
        rec.date,
        rec.time,
        to_json(&rec.conforms)?,
        to_json(&rec.does_not_conform)?,
        to_json(&rec.pest)?,
        to_json(&rec.repair)?,
        to_json(&rec.observations)?,
        to_json(&rec.photos)?,
        Local::now().to_rfc3339(),
    ])?;

    Ok(conn.last_insert_rowid())
}

pub fn map_row(row: &Row) -> rusqlite::Result<InspectionRecord> {
    Ok(InspectionRecord {
        id: Some(row.get("id")?),
        ship: row.get("ship")?,
        zone: row.get("zone")?,
        user: row.get("user")?,
        date: row.get("date")?,
        time: row.get("time")?,
        conforms: from_json(row, "conforms")?,
        does_not_conform: from_json(row, "does_not_conform")?,
        pest: from_json(row, "pest")?,
        repair: from_json(row, "repair")?,
        observations: from_json(row, "observations")?,
        photos: from_json(row, "photos")?,
    })
}

/// Inspections matching every filter that is set, in insertion order.
pub fn load_inspections(
    conn: &Connection,
    filter: &RecordFilter,
) -> AppResult<Vec<InspectionRecord>> {
    let mut sql = String::from("SELECT * FROM inspections");
    let mut clauses = Vec::new();
    let mut args: Vec<&dyn ToSql> = Vec::new();

    if let Some(ship) = &filter.ship {
        clauses.push("ship = ?");
        args.push(ship);
    }
    if let Some(zone) = &filter.zone {
        clauses.push("zone = ?");
        args.push(zone);
    }
    if let Some(date) = &filter.date {
        clauses.push("date = ?");
        args.push(date);
    }

    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(args.as_slice(), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_inspections(conn: &Connection) -> AppResult<i64> {
    conn.query_row("SELECT COUNT(*) FROM inspections", [], |row| row.get(0))
        .map_err(AppError::from)
}
