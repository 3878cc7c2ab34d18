use crate::utils::colors::{GREEN, RESET, YELLOW};
use serde::Serialize;

/// Whether a (ship, zone) pair already has an inspection for a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReviewStatus {
    Reviewed,
    NotReviewed,
}

impl ReviewStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReviewStatus::Reviewed => "REVIEWED",
            ReviewStatus::NotReviewed => "PENDING REVIEW",
        }
    }

    pub fn colored_label(&self) -> String {
        let color = match self {
            ReviewStatus::Reviewed => GREEN,
            ReviewStatus::NotReviewed => YELLOW,
        };
        format!("{color}{}{RESET}", self.label())
    }
}
