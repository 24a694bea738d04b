use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Calibration assumption when the image carries no pixel-size metadata.
pub const DEFAULT_PIXELS_PER_MM: f32 = 20.0;

/// Display-only reference circle derived from a recorded site.
///
/// Guide circles are never exported; they are regenerated whenever their
/// source site is re-recorded and cleared on image load and before save.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuideCircle {
    pub center: Point2<f32>,
    pub radius: f32,
}

/// One derivation rule: recording the named site spawns a circle per listed
/// clinical radius (in millimetres).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GuideRule {
    pub site: String,
    pub radii_mm: Vec<f32>,
}

/// The set of guide-derivation rules in effect for a session.
///
/// Rules are resolved by site-name lookup, so adding derived geometry means
/// adding a table entry, not touching session control flow.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GuideRuleSet {
    rules: Vec<GuideRule>,
}

impl Default for GuideRuleSet {
    /// The clinical default: reference circles at 1 mm and 4 mm around the
    /// apex.
    fn default() -> Self {
        Self {
            rules: vec![GuideRule {
                site: "Apex".to_owned(),
                radii_mm: vec![1.0, 4.0],
            }],
        }
    }
}

impl GuideRuleSet {
    pub fn new(rules: Vec<GuideRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[GuideRule] {
        &self.rules
    }

    /// Circles derived when `name` is recorded at `position`, or `None` if no
    /// rule matches that site name.
    pub fn circles_for(
        &self,
        name: &str,
        position: Point2<f32>,
        px_per_mm: f32,
    ) -> Option<Vec<GuideCircle>> {
        let rule = self.rules.iter().find(|r| r.site == name)?;
        Some(
            rule.radii_mm
                .iter()
                .map(|mm| GuideCircle {
                    center: position,
                    radius: mm * px_per_mm,
                })
                .collect(),
        )
    }
}
