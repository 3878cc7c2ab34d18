use crate::db::queries::RecordFilter;
use crate::db::store::InspectionStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the inspections matching `filter`.
    ///
    /// `file` must be absolute. JSON keeps photo payloads only when
    /// `with_photos` is set.
    pub fn export<S: InspectionStore + ?Sized>(
        store: &S,
        format: ExportFormat,
        file: &str,
        filter: &RecordFilter,
        with_photos: bool,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let mut records = store.query(filter)?;
        if records.is_empty() {
            warning("No inspections match the given filters; exporting an empty set.");
        }
        if !with_photos {
            records = records.iter().map(|r| r.without_photos()).collect();
        }

        match format {
            ExportFormat::Csv => export_csv(&records, path)?,
            ExportFormat::Json => export_json(&records, path)?,
        }

        Ok(records.len())
    }
}
