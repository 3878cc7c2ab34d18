//! In-memory state of one zone visit: answers, flags, observations and
//! photos per checklist item, plus the completeness rule that gates
//! submission.

use crate::core::registry::{checklist, item_key};
use crate::errors::{AppError, AppResult};
use crate::models::{Answer, InspectionRecord, PhotoEntry, Polarity, Ship, Zone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Answer and flags of one item. Pest and repair are independent of the
/// answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemState {
    pub answer: Answer,
    pub pest: bool,
    pub repair: bool,
}

/// A single change to one item. Every setter funnels through
/// [`InspectionSession::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemUpdate {
    Answer(Polarity, bool),
    Pest(bool),
    Repair(bool),
    Observation(String),
    Photo(Option<String>),
}

/// Read-only view of one registered item, in checklist order.
#[derive(Debug, Clone)]
pub struct ItemView<'a> {
    pub index: usize,
    pub key: &'a str,
    pub state: ItemState,
    pub observation: &'a str,
    pub has_photo: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionSession {
    ship: Ship,
    zone: Zone,
    /// Expected keys, deduplicated, in registration order.
    keys: Vec<String>,
    items: BTreeMap<String, ItemState>,
    observations: BTreeMap<String, String>,
    photos: BTreeMap<String, Option<String>>,
    complete: bool,
}

impl InspectionSession {
    pub fn new(ship: Ship, zone: Zone) -> Self {
        Self {
            ship,
            zone,
            keys: Vec::new(),
            items: BTreeMap::new(),
            observations: BTreeMap::new(),
            photos: BTreeMap::new(),
            complete: true,
        }
    }

    /// New session with every section of the zone registered.
    pub fn for_zone(ship: Ship, zone: Zone) -> Self {
        let mut session = Self::new(ship, zone);
        session.initialize_zone();
        session
    }

    pub fn ship(&self) -> Ship {
        self.ship
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn initialize_zone(&mut self) {
        for section in checklist(self.zone) {
            self.initialize_items(section.items, section.name);
        }
    }

    /// Register the items of a section as expected keys.
    ///
    /// Calling it again for the same section is a no-op: the expected count
    /// is the size of the key set, and observation/photo slots are only
    /// filled when absent.
    pub fn initialize_items<S: AsRef<str>>(&mut self, items: &[S], section: &str) {
        for item in items {
            let key = item_key(section, item.as_ref());
            if !self.keys.contains(&key) {
                self.keys.push(key.clone());
            }
            self.items.entry(key.clone()).or_default();
            self.observations.entry(key.clone()).or_default();
            self.photos.entry(key).or_insert(None);
        }
        self.recompute();
    }

    pub fn apply(&mut self, key: &str, update: ItemUpdate) {
        match update {
            ItemUpdate::Answer(polarity, value) => {
                let state = self.items.entry(key.to_string()).or_default();
                let target = polarity.as_answer();
                if value {
                    state.answer = target;
                } else if state.answer == target {
                    state.answer = Answer::Unset;
                }
                self.recompute();
            }
            ItemUpdate::Pest(value) => {
                self.items.entry(key.to_string()).or_default().pest = value;
            }
            ItemUpdate::Repair(value) => {
                self.items.entry(key.to_string()).or_default().repair = value;
            }
            ItemUpdate::Observation(text) => {
                self.observations.insert(key.to_string(), text);
            }
            ItemUpdate::Photo(image) => {
                self.photos.insert(key.to_string(), image);
            }
        }
    }

    pub fn set_answer(&mut self, key: &str, polarity: Polarity, value: bool) {
        self.apply(key, ItemUpdate::Answer(polarity, value));
    }

    pub fn set_pest_flag(&mut self, key: &str, value: bool) {
        self.apply(key, ItemUpdate::Pest(value));
    }

    pub fn set_repair_flag(&mut self, key: &str, value: bool) {
        self.apply(key, ItemUpdate::Repair(value));
    }

    pub fn set_observation(&mut self, key: &str, text: impl Into<String>) {
        self.apply(key, ItemUpdate::Observation(text.into()));
    }

    pub fn set_photo(&mut self, key: &str, image: Option<String>) {
        self.apply(key, ItemUpdate::Photo(image));
    }

    pub fn answer(&self, key: &str) -> Answer {
        self.items.get(key).map(|s| s.answer).unwrap_or_default()
    }

    pub fn item_state(&self, key: &str) -> ItemState {
        self.items.get(key).copied().unwrap_or_default()
    }

    pub fn observation(&self, key: &str) -> &str {
        self.observations.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn photo(&self, key: &str) -> Option<&str> {
        self.photos.get(key).and_then(|p| p.as_deref())
    }

    pub fn is_registered(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn expected_count(&self) -> usize {
        self.keys.len()
    }

    pub fn answered_count(&self) -> usize {
        self.keys.iter().filter(|k| self.answer(k).is_set()).count()
    }

    /// Clear answers, flags, observations, photos and the completion flag.
    /// Registered keys survive; see [`Self::clear_expected`].
    pub fn reset(&mut self) {
        self.items.clear();
        self.observations.clear();
        self.photos.clear();
        self.complete = false;
    }

    pub fn clear_expected(&mut self) {
        self.keys.clear();
    }

    /// Everything `reset` and `clear_expected` do; used when a visit ends.
    pub fn teardown(&mut self) {
        self.reset();
        self.clear_expected();
    }

    fn recompute(&mut self) {
        self.complete = self.keys.iter().all(|k| self.answer(k).is_set());
    }

    /// Registered items in checklist order (1-based index).
    pub fn items(&self) -> Vec<ItemView<'_>> {
        self.keys
            .iter()
            .enumerate()
            .map(|(i, key)| ItemView {
                index: i + 1,
                key: key.as_str(),
                state: self.item_state(key),
                observation: self.observation(key),
                has_photo: self.photo(key).is_some_and(|p| !p.is_empty()),
            })
            .collect()
    }

    /// Resolve a user reference to a registered key: either the exact key or
    /// its 1-based position in [`Self::items`].
    pub fn resolve_key(&self, reference: &str) -> AppResult<String> {
        if self.is_registered(reference) {
            return Ok(reference.to_string());
        }
        if let Ok(idx) = reference.trim().parse::<usize>()
            && idx >= 1
            && idx <= self.keys.len()
        {
            return Ok(self.keys[idx - 1].clone());
        }
        Err(AppError::UnknownItem(reference.to_string()))
    }

    /// Flatten the session into a record ready for submission.
    pub fn to_record(&self, user: &str, date: &str, time: &str) -> InspectionRecord {
        let mut conforms = BTreeMap::new();
        let mut does_not_conform = BTreeMap::new();
        let mut pest = BTreeMap::new();
        let mut repair = BTreeMap::new();

        for (key, state) in &self.items {
            conforms.insert(key.clone(), state.answer.conforms());
            does_not_conform.insert(key.clone(), state.answer.does_not_conform());
            pest.insert(key.clone(), state.pest);
            repair.insert(key.clone(), state.repair);
        }

        let mut photos: Vec<PhotoEntry> = self
            .keys
            .iter()
            .map(|k| PhotoEntry {
                key: k.clone(),
                data: self.photo(k).unwrap_or_default().to_string(),
            })
            .collect();
        for (key, data) in &self.photos {
            if !self.is_registered(key) {
                photos.push(PhotoEntry {
                    key: key.clone(),
                    data: data.clone().unwrap_or_default(),
                });
            }
        }

        InspectionRecord {
            id: None,
            ship: self.ship.name().to_string(),
            zone: self.zone.name().to_string(),
            user: user.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            conforms,
            does_not_conform,
            pest,
            repair,
            observations: self.observations.clone(),
            photos,
        }
    }

    // ---------------------------
    // Draft persistence
    // ---------------------------

    /// Draft file kept beside the database, so every database has its own
    /// visit in progress.
    pub fn draft_path(database: &str) -> PathBuf {
        let mut p = PathBuf::from(database).into_os_string();
        p.push(".session.json");
        PathBuf::from(p)
    }

    pub fn load_draft(path: &Path) -> AppResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let reader = BufReader::new(File::open(path)?);
        let session: Self = serde_json::from_reader(reader)?;
        Ok(Some(session))
    }

    pub fn save_draft(&self, path: &Path) -> AppResult<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn discard_draft(path: &Path) -> AppResult<bool> {
        if path.exists() {
            std::fs::remove_file(path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
