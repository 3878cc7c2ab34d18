use serde::{Deserialize, Serialize};

/// Outcome of one checklist item. A single value per item makes
/// "conforms and does not conform at the same time" unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    #[default]
    Unset,
    Conforms,
    DoesNotConform,
}

/// The two checkboxes a user can tick for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Conforms,
    DoesNotConform,
}

impl Polarity {
    pub fn as_answer(&self) -> Answer {
        match self {
            Polarity::Conforms => Answer::Conforms,
            Polarity::DoesNotConform => Answer::DoesNotConform,
        }
    }
}

impl Answer {
    pub fn is_set(&self) -> bool {
        !matches!(self, Answer::Unset)
    }

    pub fn conforms(&self) -> bool {
        matches!(self, Answer::Conforms)
    }

    pub fn does_not_conform(&self) -> bool {
        matches!(self, Answer::DoesNotConform)
    }

    /// One-character marker used in terminal tables.
    pub fn symbol(&self) -> &'static str {
        match self {
            Answer::Unset => "·",
            Answer::Conforms => "✓",
            Answer::DoesNotConform => "✗",
        }
    }
}
