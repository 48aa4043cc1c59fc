use crate::feature::{FeatureHandle, FeatureId};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// A vector source shared between its owner and the consumers drawing from it.
pub type SharedVectorSource = Rc<RefCell<VectorSource>>;

/// Backing store of one vector layer: the set of features it draws.
///
/// Keyed by feature uid; iteration order is deterministic.
#[derive(Debug, Clone, Default)]
pub struct VectorSource {
    features: BTreeMap<FeatureId, FeatureHandle>,
}

impl VectorSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source already wrapped for sharing.
    pub fn new_shared() -> SharedVectorSource {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Add a feature to the source. Re-adding the same feature is a no-op.
    pub fn add(&mut self, handle: FeatureHandle) {
        self.features.insert(handle.id(), handle);
    }

    /// Remove a feature from the source. Returns whether it was present.
    pub fn remove(&mut self, handle: &FeatureHandle) -> bool {
        self.features.remove(&handle.id()).is_some()
    }

    pub fn contains(&self, handle: &FeatureHandle) -> bool {
        self.features.contains_key(&handle.id())
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Snapshot of all features currently in the source.
    pub fn features(&self) -> Vec<FeatureHandle> {
        self.features.values().cloned().collect()
    }
}
