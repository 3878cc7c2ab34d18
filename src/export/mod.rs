mod fs_utils;
mod guard;
mod json_csv;
pub mod logic;
mod model;
pub mod pdf;
pub mod report_pdf;

pub use guard::OutputGuard;
pub use logic::ExportLogic;
pub use model::RecordExport;
pub use pdf::{Align, PdfManager};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
