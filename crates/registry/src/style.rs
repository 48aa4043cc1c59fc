use airshow_scene::{Color, Glyph, Icon, Style, TextAlign, TextLabel};
use std::f32::consts::FRAC_PI_4;

/// Label shown when a UAV id is empty.
pub const UNNAMED_LABEL: &str = "unnamed";

/// Vertical offset of the id label below the marker, in pixels.
pub const LABEL_OFFSET_Y: f32 = 24.0;

/// Base style of the feature representing the given UAV id.
///
/// A drone glyph at a fixed rotation, rotating with the view, with the id
/// rendered as a centered label below it. Depends on the id alone, so
/// deriving it again at any time yields the same style.
pub fn style_for_id(id: &str) -> Style {
    Style {
        icon: Some(Icon {
            glyph: Glyph::Drone,
            rotation: FRAC_PI_4,
            rotate_with_view: true,
        }),
        label: Some(TextLabel {
            text: if id.is_empty() {
                UNNAMED_LABEL.to_string()
            } else {
                id.to_string()
            },
            offset_y: LABEL_OFFSET_Y,
            align: TextAlign::Center,
            color: Color::WHITE,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_the_id() {
        let style = style_for_id("UAV-7");
        assert_eq!(style.label_text(), Some("UAV-7"));
    }

    #[test]
    fn empty_id_uses_placeholder() {
        let style = style_for_id("");
        assert_eq!(style.label_text(), Some(UNNAMED_LABEL));
    }

    #[test]
    fn derivation_is_stable() {
        assert_eq!(style_for_id("UAV-1"), style_for_id("UAV-1"));
    }

    #[test]
    fn icon_rotates_with_view() {
        let icon = style_for_id("UAV-1").icon.unwrap();
        assert_eq!(icon.glyph, Glyph::Drone);
        assert!(icon.rotate_with_view);
        assert_eq!(icon.rotation, FRAC_PI_4);
    }
}
