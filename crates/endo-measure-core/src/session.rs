use log::debug;
use nalgebra::Point2;

use crate::guides::{GuideCircle, GuideRuleSet, DEFAULT_PIXELS_PER_MM};
use crate::record::{FinalizeError, FinalizedRecord, RootRecord};
use crate::viewport::{MappedPoint, ViewportTransform};

/// Recoverable errors from operator actions on a session.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SessionError {
    /// The click mapped outside the image extent; nothing was recorded.
    #[error("click maps outside the image at ({x:.1}, {y:.1})")]
    OutOfBounds { x: f32, y: f32 },
    /// A site assignment was requested with no confirmed point to assign.
    #[error("no pending point; click inside the image first")]
    NoPendingPoint,
}

/// One annotation session on one radiograph.
///
/// Owns the root record, the single pending point, and the derived guide
/// circles. All mutation happens synchronously in response to discrete
/// operator actions; loading a new image means dropping the session and
/// starting a fresh one.
#[derive(Clone, Debug)]
pub struct AnnotationSession {
    record: RootRecord,
    pending: Option<Point2<f32>>,
    guides: Vec<GuideCircle>,
    rules: GuideRuleSet,
    image_size: [u32; 2],
    px_per_mm: f32,
}

impl AnnotationSession {
    /// Session over an image of the given pixel extent, with the default
    /// guide rules and calibration constant.
    pub fn new(image_size: [u32; 2], operator: impl Into<String>) -> Self {
        Self {
            record: RootRecord::new(operator),
            pending: None,
            guides: Vec::new(),
            rules: GuideRuleSet::default(),
            image_size,
            px_per_mm: DEFAULT_PIXELS_PER_MM,
        }
    }

    pub fn with_calibration(mut self, px_per_mm: f32) -> Self {
        self.px_per_mm = px_per_mm;
        self
    }

    pub fn with_rules(mut self, rules: GuideRuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Handle a pointer press in viewport coordinates.
    ///
    /// An in-bounds press becomes the pending point (replacing any previous
    /// one). An out-of-bounds press is rejected without touching the pending
    /// point.
    pub fn press(
        &mut self,
        pointer: Point2<f32>,
        view: &ViewportTransform,
    ) -> Result<Point2<f32>, SessionError> {
        match view.to_image_space(pointer, self.image_size) {
            MappedPoint::Inside(p) => {
                debug!("pending point at ({:.1}, {:.1})", p.x, p.y);
                self.pending = Some(p);
                Ok(p)
            }
            MappedPoint::Outside(p) => Err(SessionError::OutOfBounds { x: p.x, y: p.y }),
        }
    }

    /// Assign the pending point to the named site.
    ///
    /// Consumes the pending point, records (or overwrites) the site, and
    /// fires the guide rules: a matching rule replaces the current guide set.
    pub fn assign_site(&mut self, name: &str) -> Result<Point2<f32>, SessionError> {
        let point = self.pending.take().ok_or(SessionError::NoPendingPoint)?;
        self.record.sites_mut().record(name, point);
        debug!("site recorded: {name} at ({:.1}, {:.1})", point.x, point.y);

        if let Some(circles) = self.rules.circles_for(name, point, self.px_per_mm) {
            self.guides = circles;
        }
        Ok(point)
    }

    pub fn pending(&self) -> Option<Point2<f32>> {
        self.pending
    }

    pub fn guides(&self) -> &[GuideCircle] {
        &self.guides
    }

    pub fn clear_guides(&mut self) {
        self.guides.clear();
    }

    pub fn record(&self) -> &RootRecord {
        &self.record
    }

    pub fn record_mut(&mut self) -> &mut RootRecord {
        &mut self.record
    }

    pub fn image_size(&self) -> [u32; 2] {
        self.image_size
    }

    pub fn px_per_mm(&self) -> f32 {
        self.px_per_mm
    }

    /// Validate and stamp the record for export. Guide circles are cleared
    /// unconditionally before the snapshot is taken.
    pub fn finalize(&mut self, now: &str) -> Result<FinalizedRecord, FinalizeError> {
        self.guides.clear();
        self.record.finalize(now)
    }
}
