use airshow_scene::Color;
use serde::{Deserialize, Serialize};

/// Pattern matched against a UAV id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdPattern {
    Exact(String),
    Prefix(String),
    Contains(String),
}

impl IdPattern {
    pub fn matches(&self, id: &str) -> bool {
        match self {
            IdPattern::Exact(s) => id == s,
            IdPattern::Prefix(s) => id.starts_with(s),
            IdPattern::Contains(s) => id.contains(s),
        }
    }

    /// Whether the pattern text is empty. Empty patterns match every id and
    /// are rejected at config validation.
    pub fn is_empty(&self) -> bool {
        match self {
            IdPattern::Exact(s) | IdPattern::Prefix(s) | IdPattern::Contains(s) => s.is_empty(),
        }
    }
}

/// One entry of the ordered label color rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRule {
    pub color: Color,
    pub pattern: IdPattern,
}

/// Color of the first rule matching `id`, if any.
pub fn color_for(rules: &[ColorRule], id: &str) -> Option<Color> {
    rules
        .iter()
        .find(|rule| rule.pattern.matches(id))
        .map(|rule| rule.color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_kinds_match() {
        assert!(IdPattern::Exact("UAV-1".into()).matches("UAV-1"));
        assert!(!IdPattern::Exact("UAV-1".into()).matches("UAV-10"));
        assert!(IdPattern::Prefix("UAV".into()).matches("UAV-10"));
        assert!(!IdPattern::Prefix("GCS".into()).matches("UAV-10"));
        assert!(IdPattern::Contains("-1".into()).matches("UAV-12"));
    }

    #[test]
    fn first_matching_rule_wins() {
        let rules = vec![
            ColorRule {
                color: Color::BLUE,
                pattern: IdPattern::Contains("1".into()),
            },
            ColorRule {
                color: Color::GREEN,
                pattern: IdPattern::Prefix("UAV".into()),
            },
        ];
        assert_eq!(color_for(&rules, "UAV-1"), Some(Color::BLUE));
        assert_eq!(color_for(&rules, "UAV-2"), Some(Color::GREEN));
        assert_eq!(color_for(&rules, "GCS-2"), None);
    }

    #[test]
    fn empty_pattern_is_flagged() {
        assert!(IdPattern::Contains(String::new()).is_empty());
        assert!(!IdPattern::Contains("x".into()).is_empty());
    }
}
