use crate::domain::Domain;

/// Domain vocabulary used to detect technical depth in an answer.
/// Matching is case-insensitive, so entries keep their natural casing.
pub fn terms_for(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::ComputerScience => &[
            "algorithm",
            "data structure",
            "database",
            "API",
            "framework",
            "optimization",
            "scalability",
        ],
        Domain::ElectronicsEngineering => &[
            "circuit",
            "microcontroller",
            "signal",
            "frequency",
            "amplifier",
            "PCB",
            "embedded",
        ],
        Domain::MechanicalEngineering => &[
            "thermodynamics",
            "stress",
            "material",
            "manufacturing",
            "CAD",
            "design",
            "analysis",
        ],
        Domain::CivilEngineering => &[
            "structural",
            "foundation",
            "concrete",
            "steel",
            "load",
            "construction",
            "surveying",
        ],
        Domain::ChemicalEngineering => &[
            "process",
            "reaction",
            "mass transfer",
            "heat transfer",
            "distillation",
            "reactor",
            "optimization",
        ],
        Domain::ElectricalEngineering => &[
            "power",
            "voltage",
            "current",
            "motor",
            "transformer",
            "control",
            "protection",
        ],
        Domain::AerospaceEngineering => &[
            "aerodynamics",
            "propulsion",
            "orbital",
            "flight",
            "spacecraft",
            "materials",
            "systems",
        ],
        Domain::BiomedicalEngineering => &[
            "biocompatibility",
            "medical device",
            "biomechanics",
            "imaging",
            "regulatory",
            "clinical",
            "patient",
        ],
    }
}

/// Whether `answer_lower` (already lower-cased) mentions any term for `domain`.
pub fn mentions_domain_term(answer_lower: &str, domain: Domain) -> bool {
    terms_for(domain)
        .iter()
        .any(|term| answer_lower.contains(&term.to_lowercase()))
}
