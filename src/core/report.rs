//! Inspection report: record lookup, narrative prompt, block layout and the
//! PDF written to disk.

use crate::ai::{NarrativeClient, TextGenerator};
use crate::db::log::ttlog;
use crate::db::queries::RecordFilter;
use crate::db::store::InspectionStore;
use crate::errors::{AppError, AppResult};
use crate::export::OutputGuard;
use crate::export::report_pdf::render_blocks;
use crate::models::{InspectionRecord, Ship, Zone};
use crate::ui::messages::warning;
use crate::utils::date::file_stamp;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::RgbImage;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub const REPORT_TITLE: &str = "Cleaning / disinfection inspection report";
pub const REPORT_FOOTER: &str = "Document generated automatically.";
pub const NO_AI_NOTICE: &str = "Narrative evaluation not requested.";

const PROMPT_INSTRUCTIONS: &str = "\
You are reviewing a cleaning and disinfection inspection carried out on board a ship.
The JSON below describes one inspected zone. Each key of the maps is a checklist item
written as \"<section> - <item>\".
- \"conforms\": true when the item was found clean and compliant.
- \"does_not_conform\": true when the item failed the inspection.
- \"pest\": true when signs of pests were detected at the item.
- \"repair\": true when the item needs a repair.
- \"observations\": free-text remarks written by the inspector.
Write a concise evaluation of the inspection in plain prose: summarise the overall
state of the zone, point out the failed items, the pest and repair findings and any
relevant observation. Do not use headings, labels, bullet points or markdown.";

/// One element of the report, in reading order.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    HeaderImage(RgbImage),
    Title(String),
    Field { label: &'static str, value: String },
    Narrative(String),
    PhotoCaption(String),
    Photo(RgbImage),
    Footer(String),
}

/// First stored inspection for the triple.
pub fn find_inspection<S: InspectionStore + ?Sized>(
    store: &S,
    ship: Ship,
    zone: Zone,
    day: &str,
) -> AppResult<InspectionRecord> {
    store
        .query(&RecordFilter::triple(ship.name(), zone.name(), day))?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NoInspectionFound {
            ship: ship.name().to_string(),
            zone: zone.name().to_string(),
            date: day.to_string(),
        })
}

/// Prompt sent to the narrative service. Photos are never included.
pub fn build_prompt(record: &InspectionRecord) -> AppResult<String> {
    let json = serde_json::to_string_pretty(&record.without_photos())?;
    Ok(format!("{PROMPT_INSTRUCTIONS}\n\n{json}"))
}

/// Ask for the narrative. Failures turn into a notice printed in its place.
pub fn narrate<G: TextGenerator>(
    client: &mut NarrativeClient<G>,
    record: &InspectionRecord,
) -> String {
    let result = build_prompt(record).and_then(|prompt| client.send_prompt(&prompt));
    match result {
        Ok(text) => text,
        Err(e) => {
            warning(format!("Narrative generation failed: {e}"));
            unavailable_notice(&e)
        }
    }
}

pub fn unavailable_notice(err: &AppError) -> String {
    format!("Narrative evaluation unavailable ({err}).")
}

/// Decode a base64 photo (optionally a `data:` URL). `None` when empty or
/// not an image.
pub fn decode_photo(data: &str) -> Option<RgbImage> {
    let data = data.trim();
    if data.is_empty() {
        return None;
    }
    let payload = match data.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => data,
    };
    let bytes = STANDARD.decode(payload).ok()?;
    image::load_from_memory(&bytes).ok().map(|img| img.to_rgb8())
}

fn load_header(path: &Path) -> Option<RgbImage> {
    match image::open(path) {
        Ok(img) => Some(img.to_rgb8()),
        Err(e) => {
            warning(format!("Header image '{}' skipped: {e}", path.display()));
            None
        }
    }
}

pub fn report_blocks(
    record: &InspectionRecord,
    narrative: &str,
    header: Option<&Path>,
) -> Vec<Block> {
    let mut blocks = Vec::new();

    if let Some(img) = header.and_then(load_header) {
        blocks.push(Block::HeaderImage(img));
    }

    blocks.push(Block::Title(REPORT_TITLE.to_string()));
    blocks.push(Block::Field {
        label: "Ship",
        value: record.ship.clone(),
    });
    blocks.push(Block::Field {
        label: "Zone",
        value: record.zone.clone(),
    });
    blocks.push(Block::Field {
        label: "Date",
        value: record.date.clone(),
    });
    blocks.push(Block::Narrative(narrative.to_string()));

    for photo in &record.photos {
        if let Some(img) = decode_photo(&photo.data) {
            blocks.push(Block::PhotoCaption(format!("Photo: {}", photo.key)));
            blocks.push(Block::Photo(img));
        }
    }

    blocks.push(Block::Footer(REPORT_FOOTER.to_string()));
    blocks
}

/// `<dir>/Report_<ship>_<zone>_<yyyymmdd>.pdf`
pub fn default_report_path(dir: &Path, ship: Ship, zone: Zone, day: &str) -> PathBuf {
    dir.join(format!(
        "Report_{}_{}_{}.pdf",
        ship.code(),
        zone.code(),
        file_stamp(day)
    ))
}

pub struct ReportLogic;

impl ReportLogic {
    /// Lay out and write the report for `record`. The output file is removed
    /// again if anything fails before it is complete.
    pub fn render(
        conn: &Connection,
        record: &InspectionRecord,
        narrative: &str,
        header: Option<&Path>,
        output: &Path,
    ) -> AppResult<PathBuf> {
        let mut guard = OutputGuard::create(output)?;

        let blocks = report_blocks(record, narrative, header);
        let bytes = render_blocks(&blocks)?;
        guard.write_all(&bytes)?;
        let path = guard.commit()?;

        ttlog(
            conn,
            "report",
            &format!("{} / {} / {}", record.ship, record.zone, record.date),
            &format!("Report written to {}", path.display()),
        )?;

        Ok(path)
    }
}
