mod common;

use common::sample_record;
use rshipaudit::core::status::{review_status, status_board};
use rshipaudit::core::submit::submit;
use rshipaudit::db::pool::DbPool;
use rshipaudit::db::queries::RecordFilter;
use rshipaudit::db::store::InspectionStore;
use rshipaudit::errors::{AppError, AppResult};
use rshipaudit::models::{InspectionRecord, ReviewStatus, Ship, Zone};

struct BrokenStore;

impl InspectionStore for BrokenStore {
    fn insert(&self, _record: &InspectionRecord) -> AppResult<i64> {
        Err(AppError::Db(rusqlite::Error::InvalidQuery))
    }

    fn query(&self, _filter: &RecordFilter) -> AppResult<Vec<InspectionRecord>> {
        Err(AppError::Db(rusqlite::Error::InvalidQuery))
    }
}

#[test]
fn test_status_reflects_stored_records() {
    let pool = DbPool::in_memory().expect("db");
    let day = "15/03/2026";

    assert_eq!(
        review_status(&pool, Ship::CiudadPalma, Zone::Bar, day),
        ReviewStatus::NotReviewed
    );

    let record = sample_record("Ciudad de Palma", "Bar", day);
    submit(&pool, &record).expect("submit");

    assert_eq!(
        review_status(&pool, Ship::CiudadPalma, Zone::Bar, day),
        ReviewStatus::Reviewed
    );
    assert_eq!(
        review_status(&pool, Ship::CiudadPalma, Zone::Cocina, day),
        ReviewStatus::NotReviewed
    );
    assert_eq!(
        review_status(&pool, Ship::CiudadPalma, Zone::Bar, "16/03/2026"),
        ReviewStatus::NotReviewed
    );
}

#[test]
fn test_read_failure_means_not_reviewed() {
    let day = "15/03/2026";
    let status = review_status(&BrokenStore, Ship::CiudadGranada, Zone::Cocina, day);
    assert_eq!(status, ReviewStatus::NotReviewed);
}

#[test]
fn test_board_covers_every_pair() {
    let pool = DbPool::in_memory().expect("db");
    let record = sample_record("Ciudad de Sóller", "Acomodación", "15/03/2026");
    submit(&pool, &record).expect("submit");

    let board = status_board(&pool, "15/03/2026");
    assert_eq!(board.len(), 16);

    let reviewed: Vec<_> = board
        .iter()
        .filter(|(_, _, s)| *s == ReviewStatus::Reviewed)
        .collect();
    assert_eq!(reviewed.len(), 1);
    assert_eq!(reviewed[0].0, Ship::CiudadSoller);
    assert_eq!(reviewed[0].1, Zone::Acomodacion);

    let offline = status_board(&BrokenStore, "15/03/2026");
    assert!(offline.iter().all(|(_, _, s)| *s == ReviewStatus::NotReviewed));
}

#[test]
fn test_status_labels() {
    assert_eq!(ReviewStatus::Reviewed.label(), "REVIEWED");
    assert_eq!(ReviewStatus::NotReviewed.label(), "PENDING REVIEW");
}
