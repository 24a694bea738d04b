//! Core annotation model for endodontic radiograph measurement.
//!
//! This crate is intentionally UI-free. It models one annotation session on
//! one radiograph: the identified tooth/root, the named landmark sites the
//! operator records, the guide circles derived from certain sites, and the
//! pointer-to-image coordinate mapping. Image decoding, rendering and export
//! live in sibling crates.

pub mod catalog;

mod guides;
mod logger;
mod measure;
mod record;
mod session;
mod sites;
mod viewport;

pub use guides::{GuideCircle, GuideRule, GuideRuleSet, DEFAULT_PIXELS_PER_MM};
pub use measure::{distance_mm, distance_px, schneider_angle_deg};
pub use record::{
    FinalizeError, FinalizedRecord, ImageType, Quadrant, RootName, RootRecord, Tooth,
};
pub use session::{AnnotationSession, SessionError};
pub use sites::SiteRegistry;
pub use viewport::{MappedPoint, ViewportTransform};

pub use logger::init_with_level;
