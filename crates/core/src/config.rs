// Resolver configuration. The original call sites disagreed on the fuzzy
// acceptance threshold (70 to 85), so the threshold is configuration with
// per-field overrides rather than a constant.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::model::EntityField;
use crate::resolver::similarity::DEFAULT_ACCEPTANCE_THRESHOLD;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config '{path}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResolverConfig {
    /// Fuzzy acceptance threshold on the [0, 100] scale.
    pub threshold: f64,
    pub director_threshold: Option<f64>,
    pub actor_threshold: Option<f64>,
    pub title_threshold: Option<f64>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_ACCEPTANCE_THRESHOLD,
            director_threshold: None,
            actor_threshold: None,
            title_threshold: None,
        }
    }
}

impl ResolverConfig {
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Effective threshold for a field, falling back to the shared default.
    pub fn threshold_for(&self, field: EntityField) -> f64 {
        let override_value = match field {
            EntityField::Director => self.director_threshold,
            EntityField::Actor => self.actor_threshold,
            EntityField::Title => self.title_threshold,
        };
        override_value.unwrap_or(self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_every_field() {
        let config = ResolverConfig::default();
        assert_eq!(config.threshold_for(EntityField::Director), 75.0);
        assert_eq!(config.threshold_for(EntityField::Title), 75.0);
    }

    #[test]
    fn yaml_overrides_selected_fields_only() {
        let config: ResolverConfig =
            serde_yaml::from_str("threshold: 80\nactor_threshold: 70\n").unwrap();
        assert_eq!(config.threshold_for(EntityField::Director), 80.0);
        assert_eq!(config.threshold_for(EntityField::Actor), 70.0);
    }
}
