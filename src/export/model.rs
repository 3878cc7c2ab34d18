use crate::models::InspectionRecord;
use serde::Serialize;

/// One CSV line per stored inspection, answers reduced to counts.
#[derive(Debug, Clone, Serialize)]
pub struct RecordExport {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub ship: String,
    pub zone: String,
    pub user: String,
    pub conforming: usize,
    pub non_conforming: usize,
    pub pest: usize,
    pub repair: usize,
    pub observations: usize,
    pub photos: usize,
}

impl From<&InspectionRecord> for RecordExport {
    fn from(r: &InspectionRecord) -> Self {
        Self {
            id: r.id.unwrap_or_default(),
            date: r.date.clone(),
            time: r.time.clone(),
            ship: r.ship.clone(),
            zone: r.zone.clone(),
            user: r.user.clone(),
            conforming: r.conforming_count(),
            non_conforming: r.non_conforming_count(),
            pest: r.pest_count(),
            repair: r.repair_count(),
            observations: r.observations.values().filter(|o| !o.trim().is_empty()).count(),
            photos: r.photo_count(),
        }
    }
}
