use crate::style::style_for_id;
use airshow_common::MapCoord;
use airshow_scene::{FeatureHandle, SharedVectorSource};
use std::collections::BTreeMap;
use std::rc::Rc;

/// Errors from registry lifecycle operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("a feature registry cannot be re-bound to a different vector source once bound")]
    RebindNotAllowed,
}

/// Events produced by registry mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    Created { id: String },
    Replaced { id: String },
    Removed { id: String },
    SourceBound { features: usize },
}

/// Registry of map features keyed by UAV id.
///
/// Holds the authoritative id-to-feature mapping; the bound vector source is
/// a mirrored view the registry keeps consistent inside every mutating
/// operation. Callers must not add or remove registry-owned features in the
/// source directly.
#[derive(Debug, Default)]
pub struct FeatureRegistry {
    entries: BTreeMap<String, FeatureHandle>,
    source: Option<SharedVectorSource>,
    events: Vec<RegistryEvent>,
}

impl FeatureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a feature for `id` at `position` and return its handle.
    ///
    /// If `id` already had a feature, the old one is detached from the bound
    /// source and discarded before the new one is added, so at no point do
    /// two features exist for the same id.
    pub fn create(&mut self, id: &str, position: MapCoord) -> FeatureHandle {
        let handle = FeatureHandle::new(position, style_for_id(id));

        match self.entries.insert(id.to_string(), handle.clone()) {
            Some(old) => {
                if let Some(source) = &self.source {
                    source.borrow_mut().remove(&old);
                }
                self.events.push(RegistryEvent::Replaced { id: id.to_string() });
                tracing::debug!(id, "feature replaced");
            }
            None => {
                self.events.push(RegistryEvent::Created { id: id.to_string() });
                tracing::debug!(id, "feature created");
            }
        }

        if let Some(source) = &self.source {
            source.borrow_mut().add(handle.clone());
        }

        handle
    }

    /// Feature for `id`, if one exists.
    pub fn get(&self, id: &str) -> Option<FeatureHandle> {
        self.entries.get(id).cloned()
    }

    /// Snapshot of all current features.
    ///
    /// The returned vector is a copy; mutating the registry afterwards does
    /// not affect it.
    pub fn features(&self) -> Vec<FeatureHandle> {
        self.entries.values().cloned().collect()
    }

    /// Snapshot of all registered ids.
    pub fn ids(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove the feature for `id`, detaching it from the bound source.
    ///
    /// Returns the removed handle, or `None` if the id had no feature.
    /// Removing an unknown id is a safe no-op.
    pub fn remove(&mut self, id: &str) -> Option<FeatureHandle> {
        let removed = self.entries.remove(id);
        if let Some(handle) = &removed {
            if let Some(source) = &self.source {
                source.borrow_mut().remove(handle);
            }
            self.events.push(RegistryEvent::Removed { id: id.to_string() });
            tracing::debug!(id, "feature removed");
        }
        removed
    }

    /// Bind the vector source that mirrors this registry.
    ///
    /// A registry can be bound to a source only once. Binding the same
    /// source again is a no-op; binding a different source fails with
    /// [`RegistryError::RebindNotAllowed`] and changes nothing. On first
    /// bind, all features created before the bind are added to the source.
    pub fn bind(&mut self, source: SharedVectorSource) -> Result<(), RegistryError> {
        match &self.source {
            Some(bound) if Rc::ptr_eq(bound, &source) => Ok(()),
            Some(_) => Err(RegistryError::RebindNotAllowed),
            None => {
                {
                    let mut source = source.borrow_mut();
                    for handle in self.entries.values() {
                        source.add(handle.clone());
                    }
                }
                self.events.push(RegistryEvent::SourceBound {
                    features: self.entries.len(),
                });
                tracing::debug!(features = self.entries.len(), "vector source bound");
                self.source = Some(source);
                Ok(())
            }
        }
    }

    /// The bound vector source, or `None` before `bind`.
    pub fn vector_source(&self) -> Option<&SharedVectorSource> {
        self.source.as_ref()
    }

    /// Drain and return all pending registry events.
    pub fn drain_events(&mut self) -> Vec<RegistryEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only access to pending events.
    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }
}
