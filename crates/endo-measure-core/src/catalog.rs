//! Clinical site and observation catalogs.
//!
//! The UI shell builds its buttons from these tables and dispatches by name
//! lookup; the core never hard-codes per-site control flow (the guide-circle
//! rule in [`crate::GuideRuleSet`] is the one name-driven derivation, and it
//! is itself a table).

/// Response recorded when the operator has not scored an observation.
pub const NOT_SCORED: &str = "NS";

/// Sites recorded once per root.
pub const SINGLE_SITES: &[&str] = &[
    "Apex",
    "Apex GP",
    "Canal deviation",
    "Canal entrance c.",
    "Lesion periphery",
];

/// Site families recorded separately on the mesial and distal aspect.
pub const MESIAL_DISTAL_SITES: &[&str] = &[
    "Lesion side",
    "Bone level",
    "CEJ",
    "C. s. 1 mm",
    "C. s. 4 mm",
];

/// Aspect qualifier for the mesial/distal site families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aspect {
    Mesial,
    Distal,
}

impl Aspect {
    pub const ALL: [Aspect; 2] = [Aspect::Mesial, Aspect::Distal];

    pub fn suffix(self) -> &'static str {
        match self {
            Aspect::Mesial => "M",
            Aspect::Distal => "D",
        }
    }
}

/// Registry name of a mesial/distal site, e.g. `"CEJ M"`.
pub fn sided_site_name(base: &str, aspect: Aspect) -> String {
    format!("{base} {}", aspect.suffix())
}

/// Every site name the operator can record, in panel order.
pub fn all_site_names() -> Vec<String> {
    let mut names: Vec<String> = SINGLE_SITES.iter().map(|s| s.to_string()).collect();
    for base in MESIAL_DISTAL_SITES {
        for aspect in Aspect::ALL {
            names.push(sided_site_name(base, aspect));
        }
    }
    names
}

/// One qualitative observation and its legal responses.
#[derive(Clone, Copy, Debug)]
pub struct ObservationSpec {
    pub name: &'static str,
    pub responses: &'static [&'static str],
}

/// Periapical index, scored 1 (healthy) through 5 (severe periodontitis).
pub const PAI_RESPONSES: &[&str] = &[NOT_SCORED, "1", "2", "3", "4", "5"];

pub const YES_NO_RESPONSES: &[&str] = &[NOT_SCORED, "N", "Y"];

/// All qualitative observations, in panel order.
pub const OBSERVATIONS: &[ObservationSpec] = &[
    ObservationSpec {
        name: "PAI",
        responses: PAI_RESPONSES,
    },
    ObservationSpec {
        name: "Apical voids",
        responses: YES_NO_RESPONSES,
    },
    ObservationSpec {
        name: "Coronal voids",
        responses: YES_NO_RESPONSES,
    },
    ObservationSpec {
        name: "Orifice plug",
        responses: YES_NO_RESPONSES,
    },
    ObservationSpec {
        name: "Apical file fracture",
        responses: YES_NO_RESPONSES,
    },
    ObservationSpec {
        name: "Coronal file fracture",
        responses: YES_NO_RESPONSES,
    },
    ObservationSpec {
        name: "Apical perforation",
        responses: YES_NO_RESPONSES,
    },
    ObservationSpec {
        name: "Coronal perforation",
        responses: YES_NO_RESPONSES,
    },
    ObservationSpec {
        name: "Post",
        responses: YES_NO_RESPONSES,
    },
    ObservationSpec {
        name: "Restoration gap",
        responses: YES_NO_RESPONSES,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sided_names_compose_with_aspect_suffix() {
        assert_eq!(sided_site_name("C. s. 1 mm", Aspect::Mesial), "C. s. 1 mm M");
        assert_eq!(sided_site_name("Bone level", Aspect::Distal), "Bone level D");
    }

    #[test]
    fn catalog_covers_all_recordable_sites() {
        let names = all_site_names();
        assert_eq!(names.len(), SINGLE_SITES.len() + 2 * MESIAL_DISTAL_SITES.len());
        assert!(names.iter().any(|n| n == "Apex"));
        assert!(names.iter().any(|n| n == "CEJ M"));
        assert!(names.iter().any(|n| n == "Lesion side D"));
    }

    #[test]
    fn observation_names_are_unique() {
        let mut names: Vec<&str> = OBSERVATIONS.iter().map(|o| o.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), OBSERVATIONS.len());
    }

    #[test]
    fn every_observation_accepts_not_scored() {
        for obs in OBSERVATIONS {
            assert!(obs.responses.contains(&NOT_SCORED), "{}", obs.name);
        }
    }
}
