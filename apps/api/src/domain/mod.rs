//! The fixed set of fields an interview can target, with the per-domain
//! question bank and technical vocabulary.

pub mod lexicon;
pub mod questions;

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the eight fields that drive question and vocabulary selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    #[default]
    #[serde(rename = "Computer Science")]
    ComputerScience,
    #[serde(rename = "Electronics Engineering")]
    ElectronicsEngineering,
    #[serde(rename = "Mechanical Engineering")]
    MechanicalEngineering,
    #[serde(rename = "Civil Engineering")]
    CivilEngineering,
    #[serde(rename = "Chemical Engineering")]
    ChemicalEngineering,
    #[serde(rename = "Electrical Engineering")]
    ElectricalEngineering,
    #[serde(rename = "Aerospace Engineering")]
    AerospaceEngineering,
    #[serde(rename = "Biomedical Engineering")]
    BiomedicalEngineering,
}

impl Domain {
    pub const ALL: [Domain; 8] = [
        Domain::ComputerScience,
        Domain::ElectronicsEngineering,
        Domain::MechanicalEngineering,
        Domain::CivilEngineering,
        Domain::ChemicalEngineering,
        Domain::ElectricalEngineering,
        Domain::AerospaceEngineering,
        Domain::BiomedicalEngineering,
    ];

    /// Display name, also the wire representation.
    pub fn name(self) -> &'static str {
        match self {
            Domain::ComputerScience => "Computer Science",
            Domain::ElectronicsEngineering => "Electronics Engineering",
            Domain::MechanicalEngineering => "Mechanical Engineering",
            Domain::CivilEngineering => "Civil Engineering",
            Domain::ChemicalEngineering => "Chemical Engineering",
            Domain::ElectricalEngineering => "Electrical Engineering",
            Domain::AerospaceEngineering => "Aerospace Engineering",
            Domain::BiomedicalEngineering => "Biomedical Engineering",
        }
    }

    /// Exact (case-insensitive, trimmed) lookup by display name.
    pub fn from_name(name: &str) -> Option<Domain> {
        let name = name.trim();
        Domain::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }

    /// Like `from_name`, but unknown input falls back to the default domain so
    /// that callers downstream never have to handle a missing domain.
    pub fn resolve(name: &str) -> Domain {
        Domain::from_name(name).unwrap_or_else(|| {
            tracing::warn!("Unknown domain '{name}', falling back to {}", Domain::default());
            Domain::default()
        })
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
