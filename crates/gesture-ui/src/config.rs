//! Grid configuration supplied by the host page.

use crate::gestures::Gesture;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

/// Column count used when the host page does not provide one.
pub const DEFAULT_COLUMNS: usize = 3;

/// Errors raised while loading a [`GridConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Payload was not valid JSON or had the wrong shape.
    #[error("grid config could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The grid must have at least one column.
    #[error("grid config 'columns' must be at least 1")]
    ZeroColumns,

    /// No tiles would be rendered.
    #[error("grid config 'gestures' must not be empty")]
    EmptyGestures,

    /// A label was empty or whitespace.
    #[error("grid config 'gestures' contains a blank label")]
    BlankLabel,

    /// The same label appears twice, so selection would be ambiguous.
    #[error("grid config 'gestures' lists '{0}' more than once")]
    DuplicateLabel(String),

    /// Initial selection does not name any tile.
    #[error("grid config 'initial' value '{0}' is not one of the gestures")]
    UnknownInitial(String),
}

/// Layout and contents of the gesture settings grid.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Tiles per row.
    pub columns: usize,
    /// Tile labels in display order.
    pub gestures: Vec<String>,
    /// Label selected when the grid first renders.
    pub initial: Option<String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            gestures: Gesture::labels(),
            initial: None,
        }
    }
}

impl GridConfig {
    /// Parse and validate a JSON payload. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and a
    /// validation variant when the parsed config is unusable.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the grid relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if self.gestures.is_empty() {
            return Err(ConfigError::EmptyGestures);
        }
        let mut seen = HashSet::with_capacity(self.gestures.len());
        for label in &self.gestures {
            if label.trim().is_empty() {
                return Err(ConfigError::BlankLabel);
            }
            if !seen.insert(label.as_str()) {
                return Err(ConfigError::DuplicateLabel(label.clone()));
            }
        }
        if let Some(initial) = &self.initial
            && !seen.contains(initial.as_str())
        {
            return Err(ConfigError::UnknownInitial(initial.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DEFAULT_COLUMNS, GridConfig};
    use crate::gestures::Gesture;

    #[test]
    fn default_config_is_valid_and_lists_catalog() -> Result<(), ConfigError> {
        let config = GridConfig::default();
        config.validate()?;
        assert_eq!(config.columns, DEFAULT_COLUMNS);
        assert_eq!(config.gestures, Gesture::labels());
        assert!(config.initial.is_none());
        Ok(())
    }

    #[test]
    fn empty_object_falls_back_to_defaults() -> Result<(), ConfigError> {
        assert_eq!(GridConfig::from_json("{}")?, GridConfig::default());
        Ok(())
    }

    #[test]
    fn explicit_values_are_kept() -> Result<(), ConfigError> {
        let config = GridConfig::from_json(
            r#"{"columns": 2, "gestures": ["Tap", "Swipe"], "initial": "Swipe"}"#,
        )?;
        assert_eq!(config.columns, 2);
        assert_eq!(config.gestures, vec!["Tap".to_string(), "Swipe".to_string()]);
        assert_eq!(config.initial.as_deref(), Some("Swipe"));
        Ok(())
    }

    #[test]
    fn malformed_or_unknown_fields_fail_to_parse() {
        assert!(matches!(
            GridConfig::from_json("{"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GridConfig::from_json(r#"{"rows": 2}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn invalid_shapes_are_rejected() {
        assert!(matches!(
            GridConfig::from_json(r#"{"columns": 0}"#),
            Err(ConfigError::ZeroColumns)
        ));
        assert!(matches!(
            GridConfig::from_json(r#"{"gestures": []}"#),
            Err(ConfigError::EmptyGestures)
        ));
        assert!(matches!(
            GridConfig::from_json(r#"{"gestures": ["Tap", "  "]}"#),
            Err(ConfigError::BlankLabel)
        ));
        assert!(matches!(
            GridConfig::from_json(r#"{"gestures": ["Tap", "Tap"]}"#),
            Err(ConfigError::DuplicateLabel(label)) if label == "Tap"
        ));
        assert!(matches!(
            GridConfig::from_json(r#"{"gestures": ["Tap"], "initial": "Swipe"}"#),
            Err(ConfigError::UnknownInitial(label)) if label == "Swipe"
        ));
    }

    #[test]
    fn error_messages_name_the_field() {
        assert_eq!(
            ConfigError::UnknownInitial("Wave".into()).to_string(),
            "grid config 'initial' value 'Wave' is not one of the gestures"
        );
    }
}
