//! Document-store boundary used by the inspection workflow.
//!
//! The workflow only needs three calls (insert, filtered query, full scan),
//! so it is written against this trait instead of a concrete connection.

use crate::db::pool::DbPool;
use crate::db::queries::{RecordFilter, insert_inspection, load_inspections};
use crate::errors::{AppError, AppResult};
use crate::models::InspectionRecord;
use rusqlite::ErrorCode;

pub trait InspectionStore {
    /// Persist a new record and return its identity.
    fn insert(&self, record: &InspectionRecord) -> AppResult<i64>;

    /// Records matching every equality filter that is set.
    fn query(&self, filter: &RecordFilter) -> AppResult<Vec<InspectionRecord>>;

    fn list_all(&self) -> AppResult<Vec<InspectionRecord>> {
        self.query(&RecordFilter::default())
    }
}

impl InspectionStore for DbPool {
    fn insert(&self, record: &InspectionRecord) -> AppResult<i64> {
        insert_inspection(&self.conn, record).map_err(|e| match e {
            rusqlite::Error::SqliteFailure(ref err, _)
                if err.code == ErrorCode::ConstraintViolation =>
            {
                AppError::DuplicateInspection {
                    ship: record.ship.clone(),
                    zone: record.zone.clone(),
                    date: record.date.clone(),
                }
            }
            other => AppError::Db(other),
        })
    }

    fn query(&self, filter: &RecordFilter) -> AppResult<Vec<InspectionRecord>> {
        load_inspections(&self.conn, filter)
    }
}
