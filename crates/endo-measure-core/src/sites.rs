use indexmap::IndexMap;
use nalgebra::Point2;

/// Named landmark points recorded on one root.
///
/// Iteration follows insertion order, which is display-relevant: later
/// overlays draw on top. Re-recording a name overwrites the position but
/// keeps the original slot.
#[derive(Clone, Debug, Default)]
pub struct SiteRegistry {
    sites: IndexMap<String, Point2<f32>>,
}

impl SiteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `name`.
    ///
    /// Bounds are checked upstream by the viewport mapping; any in-bounds
    /// point is accepted here.
    pub fn record(&mut self, name: impl Into<String>, position: Point2<f32>) {
        self.sites.insert(name.into(), position);
    }

    pub fn get(&self, name: &str) -> Option<Point2<f32>> {
        self.sites.get(name).copied()
    }

    /// All `(name, position)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Point2<f32>)> {
        self.sites.iter().map(|(name, p)| (name.as_str(), *p))
    }

    /// Empties the registry; used when a new image is loaded.
    pub fn clear(&mut self) {
        self.sites.clear();
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}
