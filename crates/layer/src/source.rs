use crate::color;
use crate::config::{LayerConfig, LayerError};
use airshow_common::map_from_geo;
use airshow_flock::FlockEvent;
use airshow_registry::FeatureRegistry;
use airshow_scene::{Color, FeatureHandle, SharedVectorSource};
use std::collections::BTreeSet;

/// Layer source showing the current flock on the map.
///
/// Owns the feature registry bound to the layer's vector source and applies
/// flock events to it: new UAVs get a feature at their projected position,
/// moved UAVs are updated in place, removed UAVs disappear from the source.
pub struct UavLayerSource {
    registry: FeatureRegistry,
    source: SharedVectorSource,
    config: LayerConfig,
    selection: BTreeSet<String>,
}

impl UavLayerSource {
    /// Create a layer source over `source` with the given config.
    pub fn new(source: SharedVectorSource, config: LayerConfig) -> Result<Self, LayerError> {
        config.validate()?;
        let mut registry = FeatureRegistry::new();
        registry.bind(source.clone())?;
        Ok(Self {
            registry,
            source,
            config,
            selection: BTreeSet::new(),
        })
    }

    /// Apply one flock event to the layer.
    pub fn apply_event(&mut self, event: &FlockEvent) {
        match event {
            FlockEvent::Added {
                id,
                position,
                heading_deg,
            }
            | FlockEvent::Moved {
                id,
                position,
                heading_deg,
            } => {
                let position = map_from_geo(*position);
                match self.registry.get(id) {
                    Some(handle) => {
                        handle.set_position(position);
                        Self::set_heading(&handle, *heading_deg);
                    }
                    None => {
                        let handle = self.registry.create(id, position);
                        Self::set_heading(&handle, *heading_deg);
                        self.apply_label_color(&handle, id);
                    }
                }
            }
            FlockEvent::Removed { id } => {
                self.registry.remove(id);
            }
        }
    }

    /// Apply a batch of flock events in order.
    pub fn apply_events(&mut self, events: &[FlockEvent]) {
        for event in events {
            self.apply_event(event);
        }
        tracing::trace!(
            events = events.len(),
            features = self.registry.len(),
            "layer sync"
        );
    }

    /// Replace the set of selected UAV ids.
    ///
    /// Labels of UAVs entering or leaving the selection are recolored;
    /// re-applying the same selection changes nothing.
    pub fn set_selection(&mut self, ids: impl IntoIterator<Item = String>) {
        let new: BTreeSet<String> = ids.into_iter().collect();
        let changed: Vec<String> = self
            .selection
            .symmetric_difference(&new)
            .cloned()
            .collect();
        self.selection = new;
        for id in changed {
            if let Some(handle) = self.registry.get(&id) {
                self.apply_label_color(&handle, &id);
            }
        }
    }

    /// Label color for `id` under the current selection and rules.
    pub fn label_color_for(&self, id: &str) -> Color {
        if self.selection.contains(id) {
            self.config.selection_color
        } else {
            color::color_for(&self.config.color_rules, id)
                .unwrap_or(self.config.default_label_color)
        }
    }

    fn apply_label_color(&self, handle: &FeatureHandle, id: &str) {
        let mut style = handle.style();
        if let Some(label) = style.label.as_mut() {
            label.color = self.label_color_for(id);
            handle.set_style(style);
        }
    }

    fn set_heading(handle: &FeatureHandle, heading_deg: f64) {
        let mut style = handle.style();
        if let Some(icon) = style.icon.as_mut() {
            icon.rotation = heading_deg.to_radians() as f32;
            handle.set_style(style);
        }
    }

    pub fn registry(&self) -> &FeatureRegistry {
        &self.registry
    }

    pub fn vector_source(&self) -> &SharedVectorSource {
        &self.source
    }

    pub fn selection(&self) -> &BTreeSet<String> {
        &self.selection
    }

    pub fn config(&self) -> &LayerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ColorRule, IdPattern};
    use airshow_common::GeoCoord;
    use airshow_flock::Flock;
    use airshow_scene::VectorSource;

    fn layer_with(config: LayerConfig) -> UavLayerSource {
        UavLayerSource::new(VectorSource::new_shared(), config).unwrap()
    }

    fn added(id: &str, lon: f64, lat: f64) -> FlockEvent {
        FlockEvent::Added {
            id: id.to_string(),
            position: GeoCoord::new(lon, lat),
            heading_deg: 0.0,
        }
    }

    #[test]
    fn added_uav_gets_a_projected_feature() {
        let mut layer = layer_with(LayerConfig::default());
        let position = GeoCoord::new(19.0402, 47.4979);
        layer.apply_event(&FlockEvent::Added {
            id: "UAV-1".into(),
            position,
            heading_deg: 0.0,
        });

        let handle = layer.registry().get("UAV-1").unwrap();
        assert_eq!(handle.position(), map_from_geo(position));
        assert_eq!(layer.vector_source().borrow().len(), 1);
    }

    #[test]
    fn moved_uav_is_updated_in_place() {
        let mut layer = layer_with(LayerConfig::default());
        layer.apply_event(&added("UAV-1", 19.0, 47.5));
        let handle = layer.registry().get("UAV-1").unwrap();

        let target = GeoCoord::new(19.1, 47.6);
        layer.apply_event(&FlockEvent::Moved {
            id: "UAV-1".into(),
            position: target,
            heading_deg: 90.0,
        });

        // Same feature, new position and heading.
        assert!(layer.registry().get("UAV-1").unwrap().ptr_eq(&handle));
        assert_eq!(handle.position(), map_from_geo(target));
        let rotation = handle.style().icon.unwrap().rotation;
        assert!((rotation - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(layer.vector_source().borrow().len(), 1);
    }

    #[test]
    fn moved_event_for_unknown_uav_creates_it() {
        let mut layer = layer_with(LayerConfig::default());
        layer.apply_event(&FlockEvent::Moved {
            id: "UAV-1".into(),
            position: GeoCoord::new(0.0, 0.0),
            heading_deg: 0.0,
        });
        assert!(layer.registry().get("UAV-1").is_some());
    }

    #[test]
    fn removed_uav_leaves_the_source() {
        let mut layer = layer_with(LayerConfig::default());
        layer.apply_event(&added("UAV-1", 0.0, 0.0));
        layer.apply_event(&FlockEvent::Removed { id: "UAV-1".into() });

        assert!(layer.registry().is_empty());
        assert!(layer.vector_source().borrow().is_empty());
    }

    #[test]
    fn color_rules_pick_the_first_match() {
        let config = LayerConfig {
            color_rules: vec![
                ColorRule {
                    color: Color::BLUE,
                    pattern: IdPattern::Contains("1".into()),
                },
                ColorRule {
                    color: Color::GREEN,
                    pattern: IdPattern::Prefix("UAV".into()),
                },
            ],
            ..LayerConfig::default()
        };
        let mut layer = layer_with(config);
        layer.apply_event(&added("UAV-1", 0.0, 0.0));
        layer.apply_event(&added("UAV-2", 0.0, 0.0));
        layer.apply_event(&added("GCS-2", 0.0, 0.0));

        let label_color = |id: &str| {
            layer
                .registry()
                .get(id)
                .unwrap()
                .style()
                .label
                .unwrap()
                .color
        };
        assert_eq!(label_color("UAV-1"), Color::BLUE);
        assert_eq!(label_color("UAV-2"), Color::GREEN);
        assert_eq!(label_color("GCS-2"), Color::WHITE);
    }

    #[test]
    fn selection_overrides_rules_and_is_reversible() {
        let config = LayerConfig {
            color_rules: vec![ColorRule {
                color: Color::BLUE,
                pattern: IdPattern::Prefix("UAV".into()),
            }],
            ..LayerConfig::default()
        };
        let mut layer = layer_with(config);
        layer.apply_event(&added("UAV-1", 0.0, 0.0));

        layer.set_selection(["UAV-1".to_string()]);
        let handle = layer.registry().get("UAV-1").unwrap();
        assert_eq!(handle.style().label.unwrap().color, Color::ORANGE);

        layer.set_selection(Vec::<String>::new());
        assert_eq!(handle.style().label.unwrap().color, Color::BLUE);
    }

    #[test]
    fn reapplying_the_same_selection_is_idempotent() {
        let mut layer = layer_with(LayerConfig::default());
        layer.apply_event(&added("UAV-1", 0.0, 0.0));
        layer.set_selection(["UAV-1".to_string()]);
        layer.set_selection(["UAV-1".to_string()]);

        assert_eq!(layer.selection().len(), 1);
        let handle = layer.registry().get("UAV-1").unwrap();
        assert_eq!(handle.style().label.unwrap().color, Color::ORANGE);
    }

    #[test]
    fn drained_flock_events_drive_the_layer() {
        let mut flock = Flock::new();
        flock.update_uav("UAV-1", GeoCoord::new(19.0, 47.5), 0.0);
        flock.update_uav("UAV-2", GeoCoord::new(19.1, 47.5), 0.0);
        flock.update_uav("UAV-1", GeoCoord::new(19.2, 47.5), 45.0);
        flock.remove_uav("UAV-2");

        let mut layer = layer_with(LayerConfig::default());
        layer.apply_events(&flock.drain_events());

        assert_eq!(layer.registry().ids(), flock.ids());
        let handle = layer.registry().get("UAV-1").unwrap();
        assert_eq!(
            handle.position(),
            map_from_geo(flock.get("UAV-1").unwrap().position)
        );
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let config = LayerConfig {
            color_rules: vec![ColorRule {
                color: Color::BLUE,
                pattern: IdPattern::Exact(String::new()),
            }],
            ..LayerConfig::default()
        };
        assert!(matches!(
            UavLayerSource::new(VectorSource::new_shared(), config),
            Err(LayerError::EmptyRulePattern { index: 0 })
        ));
    }
}
