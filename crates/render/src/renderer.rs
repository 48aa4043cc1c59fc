use airshow_common::MapCoord;
use airshow_scene::VectorSource;

/// View configuration for rendering a map layer.
#[derive(Debug, Clone, Copy)]
pub struct MapView {
    /// Center of the view on the map plane.
    pub center: MapCoord,
    /// Web-map zoom level.
    pub zoom: f64,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: MapCoord::default(),
            zoom: 10.0,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the vector source and a view configuration, then
/// produces output. It never mutates the source.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given source and view.
    fn render(&self, source: &VectorSource, view: &MapView) -> Self::Output;
}

/// Debug text renderer standing in for the map canvas.
///
/// Produces a human-readable listing of the source's features, sorted by
/// label for stable output. Useful for CLI frames and tests.
#[derive(Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&self, source: &VectorSource, view: &MapView) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Map ({:.1}, {:.1}) z{:.1} ===\n",
            view.center.x(),
            view.center.y(),
            view.zoom
        ));
        out.push_str(&format!("Features: {}\n", source.len()));

        let mut lines: Vec<String> = source
            .features()
            .iter()
            .map(|f| {
                let p = f.position();
                let style = f.style();
                let label = style.label_text().unwrap_or("<unlabeled>");
                format!("  [{label}] pos=({:.1}, {:.1})\n", p.x(), p.y())
            })
            .collect();
        lines.sort();
        for line in lines {
            out.push_str(&line);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airshow_scene::{FeatureHandle, Style, TextAlign, TextLabel};

    fn labeled_feature(label: &str, x: f64, y: f64) -> FeatureHandle {
        FeatureHandle::new(
            MapCoord::new(x, y),
            Style {
                icon: None,
                label: Some(TextLabel {
                    text: label.to_string(),
                    offset_y: 24.0,
                    align: TextAlign::Center,
                    color: Default::default(),
                }),
            },
        )
    }

    #[test]
    fn renders_empty_source() {
        let source = VectorSource::new();
        let output = TextRenderer::new().render(&source, &MapView::default());

        assert!(output.contains("Features: 0"));
    }

    #[test]
    fn renders_features_sorted_by_label() {
        let mut source = VectorSource::new();
        source.add(labeled_feature("UAV-2", 3.0, 4.0));
        source.add(labeled_feature("UAV-1", 1.0, 2.0));

        let output = TextRenderer::new().render(&source, &MapView::default());
        assert!(output.contains("Features: 2"));
        let uav1 = output.find("[UAV-1]").unwrap();
        let uav2 = output.find("[UAV-2]").unwrap();
        assert!(uav1 < uav2);
        assert!(output.contains("pos=(1.0, 2.0)"));
    }

    #[test]
    fn map_view_default() {
        let view = MapView::default();
        assert_eq!(view.zoom, 10.0);
        assert_eq!(view.center, MapCoord::default());
    }
}
