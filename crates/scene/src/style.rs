use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLUE: Color = Color::rgb(0.2, 0.4, 1.0);
    pub const GREEN: Color = Color::rgb(0.1, 0.7, 0.3);
    pub const ORANGE: Color = Color::rgb(1.0, 0.6, 0.1);
    pub const PINK: Color = Color::rgb(1.0, 0.4, 0.7);
    pub const PURPLE: Color = Color::rgb(0.6, 0.3, 0.9);
    pub const YELLOW: Color = Color::rgb(0.9, 0.8, 0.1);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// Marker glyph kinds a map layer can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Glyph {
    Drone,
}

/// An icon marker: a glyph at a fixed rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    pub glyph: Glyph,
    /// Rotation in radians, clockwise from north.
    pub rotation: f32,
    /// Whether the glyph rotates together with the map view.
    pub rotate_with_view: bool,
}

/// Horizontal alignment of a text label relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// A text label drawn at a vertical offset from the feature's anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub text: String,
    /// Offset in pixels below the anchor; positive is down.
    pub offset_y: f32,
    pub align: TextAlign,
    pub color: Color,
}

/// Complete style of a feature: an optional icon and an optional label.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Style {
    pub icon: Option<Icon>,
    pub label: Option<TextLabel>,
}

impl Style {
    /// Label text, if the style carries a label.
    pub fn label_text(&self) -> Option<&str> {
        self.label.as_ref().map(|l| l.text.as_str())
    }
}
