use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Photo attached to a checklist item, base64 encoded. An empty `data`
/// means the item has no photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoEntry {
    pub key: String,
    pub data: String,
}

impl PhotoEntry {
    pub fn is_empty(&self) -> bool {
        self.data.trim().is_empty()
    }
}

/// Persisted outcome of one completed zone visit. Created once, never
/// updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub ship: String,
    pub zone: String,
    pub user: String,
    /// Calendar day, `dd/mm/YYYY`
    pub date: String,
    /// `HH:MM:SS`
    pub time: String,
    pub conforms: BTreeMap<String, bool>,
    pub does_not_conform: BTreeMap<String, bool>,
    pub pest: BTreeMap<String, bool>,
    pub repair: BTreeMap<String, bool>,
    pub observations: BTreeMap<String, String>,
    pub photos: Vec<PhotoEntry>,
}

impl InspectionRecord {
    pub fn matches(&self, ship: &str, zone: &str, date: &str) -> bool {
        self.ship == ship && self.zone == zone && self.date == date
    }

    pub fn conforming_count(&self) -> usize {
        self.conforms.values().filter(|v| **v).count()
    }

    pub fn non_conforming_count(&self) -> usize {
        self.does_not_conform.values().filter(|v| **v).count()
    }

    pub fn pest_count(&self) -> usize {
        self.pest.values().filter(|v| **v).count()
    }

    pub fn repair_count(&self) -> usize {
        self.repair.values().filter(|v| **v).count()
    }

    pub fn photo_count(&self) -> usize {
        self.photos.iter().filter(|p| !p.is_empty()).count()
    }

    /// Copy of the record without image payloads (used for prompts and
    /// JSON listings).
    pub fn without_photos(&self) -> Self {
        let mut out = self.clone();
        out.photos.clear();
        out
    }
}
