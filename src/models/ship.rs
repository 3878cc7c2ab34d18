use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Vessels of the fleet subject to cleaning inspections.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
pub enum Ship {
    #[value(name = "barcelona")]
    CiudadBarcelona,
    #[value(name = "granada")]
    CiudadGranada,
    #[value(name = "palma")]
    CiudadPalma,
    #[value(name = "soller")]
    CiudadSoller,
}

impl Ship {
    pub const ALL: [Ship; 4] = [
        Ship::CiudadBarcelona,
        Ship::CiudadGranada,
        Ship::CiudadPalma,
        Ship::CiudadSoller,
    ];

    /// Display name, also the value stored in inspection records.
    pub fn name(&self) -> &'static str {
        match self {
            Ship::CiudadBarcelona => "Ciudad de Barcelona",
            Ship::CiudadGranada => "Ciudad de Granada",
            Ship::CiudadPalma => "Ciudad de Palma",
            Ship::CiudadSoller => "Ciudad de Sóller",
        }
    }

    /// Short CLI code
    pub fn code(&self) -> &'static str {
        match self {
            Ship::CiudadBarcelona => "barcelona",
            Ship::CiudadGranada => "granada",
            Ship::CiudadPalma => "palma",
            Ship::CiudadSoller => "soller",
        }
    }

    /// Accepts the short code or the display name, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        Ship::ALL
            .into_iter()
            .find(|ship| ship.code() == needle || ship.name().to_lowercase() == needle)
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
