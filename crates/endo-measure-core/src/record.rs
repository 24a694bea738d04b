use indexmap::IndexMap;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::catalog::NOT_SCORED;
use crate::sites::SiteRegistry;

/// FDI quadrant of the tooth being measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quadrant {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UpperRight,
        Quadrant::UpperLeft,
        Quadrant::LowerLeft,
        Quadrant::LowerRight,
    ];

    /// FDI quadrant number, 1 through 4.
    pub fn number(self) -> u8 {
        match self {
            Quadrant::UpperRight => 1,
            Quadrant::UpperLeft => 2,
            Quadrant::LowerLeft => 3,
            Quadrant::LowerRight => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.number() == n)
    }
}

/// Tooth position within the quadrant, central incisor (1) through third
/// molar (8), or `Unknown` when the position cannot be determined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tooth {
    CentralIncisor,
    LateralIncisor,
    Canine,
    FirstPremolar,
    SecondPremolar,
    FirstMolar,
    SecondMolar,
    ThirdMolar,
    Unknown,
}

impl Tooth {
    pub const ALL: [Tooth; 9] = [
        Tooth::CentralIncisor,
        Tooth::LateralIncisor,
        Tooth::Canine,
        Tooth::FirstPremolar,
        Tooth::SecondPremolar,
        Tooth::FirstMolar,
        Tooth::SecondMolar,
        Tooth::ThirdMolar,
        Tooth::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tooth::CentralIncisor => "1",
            Tooth::LateralIncisor => "2",
            Tooth::Canine => "3",
            Tooth::FirstPremolar => "4",
            Tooth::SecondPremolar => "5",
            Tooth::FirstMolar => "6",
            Tooth::SecondMolar => "7",
            Tooth::ThirdMolar => "8",
            Tooth::Unknown => "X",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// Anatomical root designation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RootName {
    /// Single-rooted tooth.
    Single,
    Buccal,
    Lingual,
    Mesial,
    Distal,
    MesioBuccal,
    MesioLingual,
    DistoBuccal,
    DistoLingual,
    Unknown,
}

impl RootName {
    pub const ALL: [RootName; 10] = [
        RootName::Single,
        RootName::Buccal,
        RootName::Lingual,
        RootName::Mesial,
        RootName::Distal,
        RootName::MesioBuccal,
        RootName::MesioLingual,
        RootName::DistoBuccal,
        RootName::DistoLingual,
        RootName::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RootName::Single => "1",
            RootName::Buccal => "B",
            RootName::Lingual => "L",
            RootName::Mesial => "M",
            RootName::Distal => "D",
            RootName::MesioBuccal => "MB",
            RootName::MesioLingual => "ML",
            RootName::DistoBuccal => "DB",
            RootName::DistoLingual => "DL",
            RootName::Unknown => "X",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

/// Stage of treatment the radiograph documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageType {
    Preop,
    Compl,
    Ctrl,
    #[default]
    Other,
}

impl ImageType {
    pub const ALL: [ImageType; 4] = [
        ImageType::Preop,
        ImageType::Compl,
        ImageType::Ctrl,
        ImageType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ImageType::Preop => "Preop",
            ImageType::Compl => "Compl",
            ImageType::Ctrl => "Ctrl",
            ImageType::Other => "Other",
        }
    }
}

/// Errors from [`RootRecord::finalize`].
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FinalizeError {
    #[error("root not fully identified: quadrant, tooth and root are required before saving")]
    NotIdentified,
    #[error("record already finalized at {timestamp}; start a new session instead")]
    AlreadyFinalized { timestamp: String },
}

/// The full identification and annotation state for one tooth/root in one
/// session.
///
/// Created empty when an image is opened, mutated by operator actions, and
/// finalized exactly once at save time.
#[derive(Clone, Debug)]
pub struct RootRecord {
    operator: String,
    quadrant: Option<Quadrant>,
    tooth: Option<Tooth>,
    root: Option<RootName>,
    image_type: ImageType,
    observations: IndexMap<String, String>,
    comments: String,
    sites: SiteRegistry,
    timestamp: Option<String>,
}

impl RootRecord {
    pub fn new(operator: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            quadrant: None,
            tooth: None,
            root: None,
            image_type: ImageType::default(),
            observations: IndexMap::new(),
            comments: String::new(),
            sites: SiteRegistry::new(),
            timestamp: None,
        }
    }

    /// Assign all identification fields at once. No validation happens here;
    /// validation is deferred to [`finalize`](Self::finalize).
    pub fn set_identification(
        &mut self,
        quadrant: Quadrant,
        tooth: Tooth,
        root: RootName,
        image_type: ImageType,
    ) {
        self.quadrant = Some(quadrant);
        self.tooth = Some(tooth);
        self.root = Some(root);
        self.image_type = image_type;
    }

    pub fn set_quadrant(&mut self, quadrant: Quadrant) {
        self.quadrant = Some(quadrant);
    }

    pub fn set_tooth(&mut self, tooth: Tooth) {
        self.tooth = Some(tooth);
    }

    pub fn set_root(&mut self, root: RootName) {
        self.root = Some(root);
    }

    pub fn set_image_type(&mut self, image_type: ImageType) {
        self.image_type = image_type;
    }

    /// True once quadrant, tooth and root have all been assigned.
    pub fn is_identified(&self) -> bool {
        self.quadrant.is_some() && self.tooth.is_some() && self.root.is_some()
    }

    pub fn set_observation(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.observations.insert(name.into(), value.into());
    }

    /// Recorded response for an observation, or the not-scored default.
    pub fn observation(&self, name: &str) -> &str {
        self.observations
            .get(name)
            .map(String::as_str)
            .unwrap_or(NOT_SCORED)
    }

    pub fn set_comments(&mut self, text: impl Into<String>) {
        self.comments = text.into();
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn comments(&self) -> &str {
        &self.comments
    }

    pub fn image_type(&self) -> ImageType {
        self.image_type
    }

    pub fn sites(&self) -> &SiteRegistry {
        &self.sites
    }

    pub fn sites_mut(&mut self) -> &mut SiteRegistry {
        &mut self.sites
    }

    /// Validate and stamp the record for export.
    ///
    /// Fails without mutating anything if the root is not fully identified.
    /// The timestamp is stamped exactly once; a second call is a defined
    /// error, never a silent re-stamp.
    pub fn finalize(&mut self, now: &str) -> Result<FinalizedRecord, FinalizeError> {
        if let Some(stamp) = &self.timestamp {
            return Err(FinalizeError::AlreadyFinalized {
                timestamp: stamp.clone(),
            });
        }
        let (Some(quadrant), Some(tooth), Some(root)) = (self.quadrant, self.tooth, self.root)
        else {
            return Err(FinalizeError::NotIdentified);
        };
        self.timestamp = Some(now.to_owned());

        Ok(FinalizedRecord {
            operator: self.operator.clone(),
            quadrant,
            tooth,
            root,
            image_type: self.image_type,
            timestamp: now.to_owned(),
            observations: self
                .observations
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            sites: self.sites.iter().map(|(n, p)| (n.to_owned(), p)).collect(),
            comments: self.comments.clone(),
        })
    }
}

/// Immutable snapshot of a validated record, as handed to the exporter.
#[derive(Clone, Debug)]
pub struct FinalizedRecord {
    pub operator: String,
    pub quadrant: Quadrant,
    pub tooth: Tooth,
    pub root: RootName,
    pub image_type: ImageType,
    pub timestamp: String,
    pub observations: Vec<(String, String)>,
    pub sites: Vec<(String, Point2<f32>)>,
    pub comments: String,
}
