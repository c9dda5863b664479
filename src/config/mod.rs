//! Chart category configuration.
//!
//! Which counters chart, and under which labels, is configuration rather
//! than data: the ordered category list is loaded from a TOML file (or the
//! built-in shot categories) and passed into the aggregation engine.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::models::ChartCategory;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Ordered chart category configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Categories in display order. Order matters: it is the tie-break order
    /// of the ranked chart.
    #[serde(default = "default_categories")]
    pub categories: Vec<ChartCategory>,
}

fn default_categories() -> Vec<ChartCategory> {
    [
        ("shots_when_dead", "When dead"),
        ("shots_when_wet", "When wet"),
        ("shots_when_confiscated", "Without a weapon"),
        ("shots_when_sabotaged", "With a sabotaged weapon"),
        ("shots_when_jammed", "With a jammed weapon"),
        ("shots_with_empty_magazine", "Without bullets"),
        ("shots_jamming_weapon", "Jamming the gun"),
        ("shots_with_duck", "With ducks"),
        ("shots_without_ducks", "Without ducks"),
        ("shots_stopped_by_detector", "Stopped by the detector"),
    ]
    .into_iter()
    .map(|(key, label)| ChartCategory::new(key, label))
    .collect()
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
        }
    }
}

impl ChartConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ChartConfig = toml::from_str(&contents)?;
        config.validate()?;
        info!(
            path = %path.display(),
            categories = config.categories.len(),
            "loaded chart config"
        );
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one chart category is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.key.is_empty() || category.label.is_empty() {
                return Err(ConfigError::ValidationError(
                    "category keys and labels must be non-empty".to_string(),
                ));
            }
            if !seen.insert(category.key.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate category key: {}",
                    category.key
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChartConfig::default();

        assert_eq!(config.categories.len(), 10);
        assert_eq!(config.categories[0].key, "shots_when_dead");
        assert_eq!(config.categories[0].label, "When dead");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[categories]]
key = "shots_with_duck"
label = "With ducks"

[[categories]]
key = "shots_when_wet"
label = "When wet"
"#
        )
        .unwrap();

        let config = ChartConfig::from_file(file.path()).unwrap();

        assert_eq!(config.categories.len(), 2);
        assert_eq!(config.categories[1].label, "When wet");
    }

    #[test]
    fn test_config_missing_file() {
        let result = ChartConfig::from_file(Path::new("/nonexistent/chart.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn test_config_validation_empty_categories() {
        let config = ChartConfig {
            categories: Vec::new(),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_config_validation_duplicate_key() {
        let config = ChartConfig {
            categories: vec![
                ChartCategory::new("a", "First"),
                ChartCategory::new("a", "Second"),
            ],
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_default_config_roundtrips_through_toml() {
        let config = ChartConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let back: ChartConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(back.categories, config.categories);
    }
}
