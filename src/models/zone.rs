use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Areas of a ship inspected independently.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
pub enum Zone {
    #[value(name = "acomodacion")]
    Acomodacion,
    #[value(name = "autoservicio")]
    Autoservicio,
    #[value(name = "bar")]
    Bar,
    #[value(name = "cocina")]
    Cocina,
}

impl Zone {
    pub const ALL: [Zone; 4] = [
        Zone::Acomodacion,
        Zone::Autoservicio,
        Zone::Bar,
        Zone::Cocina,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Zone::Acomodacion => "Acomodación",
            Zone::Autoservicio => "Autoservicio",
            Zone::Bar => "Bar",
            Zone::Cocina => "Cocina",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Zone::Acomodacion => "acomodacion",
            Zone::Autoservicio => "autoservicio",
            Zone::Bar => "bar",
            Zone::Cocina => "cocina",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        Zone::ALL
            .into_iter()
            .find(|zone| zone.code() == needle || zone.name().to_lowercase() == needle)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
