use crate::core::registry::all_pairs;
use crate::db::store::InspectionStore;
use crate::models::{ReviewStatus, Ship, Zone};

/// REVIEWED when a record exists for (ship, zone, day).
///
/// Any read failure yields NOT_REVIEWED: the status board shows a pending
/// zone rather than an error.
pub fn review_status<S: InspectionStore + ?Sized>(
    store: &S,
    ship: Ship,
    zone: Zone,
    day: &str,
) -> ReviewStatus {
    match store.list_all() {
        Ok(records) if records.iter().any(|r| r.matches(ship.name(), zone.name(), day)) => {
            ReviewStatus::Reviewed
        }
        _ => ReviewStatus::NotReviewed,
    }
}

/// Status of every (ship, zone) pair for one day.
pub fn status_board<S: InspectionStore + ?Sized>(
    store: &S,
    day: &str,
) -> Vec<(Ship, Zone, ReviewStatus)> {
    all_pairs()
        .into_iter()
        .map(|(ship, zone)| (ship, zone, review_status(store, ship, zone, day)))
        .collect()
}
