//! Duplicate-guarded persistence of finished inspections.

use crate::core::session::InspectionSession;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::RecordFilter;
use crate::db::store::InspectionStore;
use crate::errors::{AppError, AppResult};
use crate::models::InspectionRecord;
use crate::ui::messages::warning;
use crate::utils::date::{canonical_day, now_time_str};
use std::path::Path;

/// Store `record` unless an inspection already exists for the same ship,
/// zone and calendar day. Returns the new record identity.
///
/// The existence check and the insert are two separate calls. A store that
/// enforces uniqueness on (ship, zone, date) reports a racing insert as a
/// duplicate as well; any other store failure is returned unchanged so that
/// callers can tell "already done" from "try again".
pub fn submit<S: InspectionStore + ?Sized>(
    store: &S,
    record: &InspectionRecord,
) -> AppResult<i64> {
    let date = canonical_day(&record.date)
        .ok_or_else(|| AppError::InvalidDate(record.date.clone()))?;

    let mut record = record.clone();
    record.date = date;

    let filter = RecordFilter::triple(&record.ship, &record.zone, &record.date);
    let existing = store.query(&filter)?;
    if !existing.is_empty() {
        return Err(AppError::DuplicateInspection {
            ship: record.ship,
            zone: record.zone,
            date: record.date,
        });
    }

    store.insert(&record)
}

/// Submit a completed visit, then drop its draft at `draft_path`.
///
/// Once the insert succeeds the visit is saved: the draft is removed before
/// the audit entry is written, and later failures are only warnings.
pub fn finish_session(
    pool: &DbPool,
    session: &InspectionSession,
    user: &str,
    day: &str,
    draft_path: &Path,
) -> AppResult<i64> {
    let record = session.to_record(user, day, &now_time_str());
    let id = submit(pool, &record)?;

    if let Err(e) = InspectionSession::discard_draft(draft_path) {
        warning(format!("Inspection saved but its draft was kept: {e}"));
    }

    if let Err(e) = ttlog(
        &pool.conn,
        "submit",
        &format!("{} / {} / {}", record.ship, record.zone, day),
        &format!("Inspection #{id} submitted by {user}"),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    Ok(id)
}
