use airshow_common::GeoCoord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Last known state of one UAV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Uav {
    pub id: String,
    pub position: GeoCoord,
    /// Heading in degrees, clockwise from north.
    pub heading_deg: f64,
}

/// Events produced by flock mutations.
///
/// Each event carries the full payload a subscriber needs, so consumers can
/// apply them without reading the flock back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FlockEvent {
    Added {
        id: String,
        position: GeoCoord,
        heading_deg: f64,
    },
    Moved {
        id: String,
        position: GeoCoord,
        heading_deg: f64,
    },
    Removed {
        id: String,
    },
}

/// The set of UAVs currently known to the application.
///
/// Keyed by UAV id; iteration order is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Flock {
    uavs: BTreeMap<String, Uav>,
    #[serde(skip)]
    events: Vec<FlockEvent>,
}

impl Flock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a status update for a UAV, inserting it if unseen.
    pub fn update_uav(&mut self, id: &str, position: GeoCoord, heading_deg: f64) {
        let uav = Uav {
            id: id.to_string(),
            position,
            heading_deg,
        };
        if self.uavs.insert(id.to_string(), uav).is_some() {
            self.events.push(FlockEvent::Moved {
                id: id.to_string(),
                position,
                heading_deg,
            });
        } else {
            tracing::debug!(id, "uav joined the flock");
            self.events.push(FlockEvent::Added {
                id: id.to_string(),
                position,
                heading_deg,
            });
        }
    }

    /// Forget a UAV. Returns its last state if it was known.
    pub fn remove_uav(&mut self, id: &str) -> Option<Uav> {
        let removed = self.uavs.remove(id);
        if removed.is_some() {
            tracing::debug!(id, "uav left the flock");
            self.events.push(FlockEvent::Removed { id: id.to_string() });
        }
        removed
    }

    pub fn get(&self, id: &str) -> Option<&Uav> {
        self.uavs.get(id)
    }

    pub fn ids(&self) -> Vec<String> {
        self.uavs.keys().cloned().collect()
    }

    pub fn uavs(&self) -> &BTreeMap<String, Uav> {
        &self.uavs
    }

    pub fn len(&self) -> usize {
        self.uavs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uavs.is_empty()
    }

    /// Drain and return all pending flock events.
    pub fn drain_events(&mut self) -> Vec<FlockEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only access to pending events.
    pub fn events(&self) -> &[FlockEvent] {
        &self.events
    }
}
