use crate::color::ColorRule;
use airshow_registry::RegistryError;
use airshow_scene::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from layer configuration and setup.
#[derive(Debug, thiserror::Error)]
pub enum LayerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("color rule {index} has an empty pattern")]
    EmptyRulePattern { index: usize },
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Configuration of one UAV layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Ordered label color rules; the first match wins.
    pub color_rules: Vec<ColorRule>,
    /// Label color when no rule matches.
    pub default_label_color: Color,
    /// Label color of selected UAVs, overriding the rules.
    pub selection_color: Color,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            color_rules: Vec::new(),
            default_label_color: Color::WHITE,
            selection_color: Color::ORANGE,
        }
    }
}

impl LayerConfig {
    /// Check that every rule has a usable pattern.
    pub fn validate(&self) -> Result<(), LayerError> {
        for (index, rule) in self.color_rules.iter().enumerate() {
            if rule.pattern.is_empty() {
                return Err(LayerError::EmptyRulePattern { index });
            }
        }
        Ok(())
    }

    /// Load and validate a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LayerError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the config to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LayerError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
