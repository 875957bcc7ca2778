use crate::domain::Domain;

/// Ordered question list asked during an interview for `domain`. Never empty.
pub fn questions_for(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::ComputerScience => &[
            "Tell me about yourself and why you're interested in computer science.",
            "Explain the difference between a stack and a queue data structure.",
            "How would you approach debugging a program that's running slowly?",
            "Describe a challenging programming project you've worked on.",
            "What is object-oriented programming and why is it useful?",
            "How would you design a system to handle 1 million users?",
            "Explain the concept of Big O notation with examples.",
        ],
        Domain::ElectronicsEngineering => &[
            "Tell me about yourself and your interest in electronics engineering.",
            "Explain the difference between analog and digital circuits.",
            "How would you troubleshoot a circuit that's not working as expected?",
            "Describe a project where you designed or built an electronic system.",
            "What is the purpose of a capacitor in a circuit?",
            "How would you approach designing a low-power embedded system?",
            "Explain the concept of impedance matching in RF circuits.",
        ],
        Domain::MechanicalEngineering => &[
            "Tell me about yourself and why you chose mechanical engineering.",
            "Explain the first and second laws of thermodynamics.",
            "How would you approach designing a mechanical system for high reliability?",
            "Describe a project where you applied engineering principles to solve a problem.",
            "What factors would you consider when selecting materials for a component?",
            "How would you optimize a manufacturing process for efficiency?",
            "Explain the concept of stress concentration and how to mitigate it.",
        ],
        Domain::CivilEngineering => &[
            "Tell me about yourself and your passion for civil engineering.",
            "Explain the difference between compression and tension in structural elements.",
            "How would you approach a site investigation for a new construction project?",
            "Describe a civil engineering project that interests you and why.",
            "What factors influence the design of a foundation system?",
            "How would you ensure quality control in a construction project?",
            "Explain the importance of sustainability in modern civil engineering.",
        ],
        Domain::ChemicalEngineering => &[
            "Tell me about yourself and your interest in chemical engineering.",
            "Explain the concept of mass balance in chemical processes.",
            "How would you approach scaling up a laboratory process to industrial scale?",
            "Describe a chemical process that you find particularly interesting.",
            "What safety considerations are crucial in chemical plant design?",
            "How would you optimize a chemical reaction for maximum yield?",
            "Explain the role of heat transfer in chemical process design.",
        ],
        Domain::ElectricalEngineering => &[
            "Tell me about yourself and why you chose electrical engineering.",
            "Explain the difference between AC and DC power systems.",
            "How would you approach designing a power distribution system?",
            "Describe a project involving electrical systems that you've worked on.",
            "What are the key considerations in motor selection for an application?",
            "How would you implement protection systems in electrical networks?",
            "Explain the concept of power factor and its importance.",
        ],
        Domain::AerospaceEngineering => &[
            "Tell me about yourself and your fascination with aerospace engineering.",
            "Explain the four forces acting on an aircraft in flight.",
            "How would you approach the design of a spacecraft thermal protection system?",
            "Describe an aerospace project or mission that inspires you.",
            "What are the key challenges in designing for the space environment?",
            "How would you optimize an aircraft design for fuel efficiency?",
            "Explain the concept of orbital mechanics and satellite trajectories.",
        ],
        Domain::BiomedicalEngineering => &[
            "Tell me about yourself and your interest in biomedical engineering.",
            "Explain how you would approach designing a medical device for patient safety.",
            "How would you validate the biocompatibility of a new implant material?",
            "Describe a biomedical technology that you think has great potential.",
            "What regulatory considerations are important in medical device development?",
            "How would you approach solving a clinical problem through engineering?",
            "Explain the importance of human factors in medical device design.",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_domain_has_seven_questions() {
        for domain in Domain::ALL {
            assert_eq!(questions_for(domain).len(), 7, "{domain}");
        }
    }

    #[test]
    fn test_unknown_domain_gets_default_questions() {
        let fallback = questions_for(Domain::resolve("Philosophy"));
        assert_eq!(fallback, questions_for(Domain::ComputerScience));
        assert!(fallback[0].contains("computer science"));
    }
}
