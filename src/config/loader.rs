//! Loading and saving experiment configurations
//!
//! A configuration is read once at process start, parsed, validated and then
//! handed to consumers by reference. Problems surface here, not at first use.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use super::schema::{ExperimentConfig, DEFAULT_RANDOM_STATE};
use super::validate::validate_config;
use crate::error::{Error, Result};

/// On-disk encoding of a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    #[default]
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension; anything but `.json` is YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

impl std::str::FromStr for ConfigFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            _ => Err(format!("Unknown config format: {s}. Valid formats: yaml, json")),
        }
    }
}

/// Groups that carry their own `random_state`, as paths into the document
const SEEDED_GROUPS: [&[&str]; 3] = [
    &["random_forest"],
    &["random_forest_search", "search_cv"],
    &["logistic_regression"],
];

/// Fill every group that omits `random_state` with the global seed
///
/// A missing global seed counts as [`DEFAULT_RANDOM_STATE`]. Explicit group
/// seeds are left alone; an invalid global seed is left for typed
/// deserialization to reject.
fn inherit_global_seed(document: &mut Value) {
    let global_seed = match document.pointer("/global/random_state") {
        None => u64::from(DEFAULT_RANDOM_STATE),
        Some(seed) => match seed.as_u64() {
            Some(seed) => seed,
            None => return,
        },
    };

    for path in SEEDED_GROUPS {
        let group = path.iter().try_fold(&mut *document, |node, key| node.get_mut(*key));
        if let Some(Value::Object(fields)) = group {
            fields
                .entry("random_state")
                .or_insert_with(|| Value::from(global_seed));
        }
    }
}

impl ExperimentConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let document: Value = serde_yaml::from_str(yaml)
            .map_err(|e| Error::MalformedConfiguration(format!("Failed to parse YAML: {e}")))?;
        Self::from_document(document)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(json)
            .map_err(|e| Error::MalformedConfiguration(format!("Failed to parse JSON: {e}")))?;
        Self::from_document(document)
    }

    /// Parse and validate a document in the given format
    pub fn from_str_as(content: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Yaml => Self::from_yaml_str(content),
            ConfigFormat::Json => Self::from_json_str(content),
        }
    }

    /// Serialize to YAML; absent optional values are written as `null`
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Serialize to pretty-printed JSON; absent optional values are written as `null`
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Serialize in the given format
    pub fn to_string_as(&self, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Yaml => self.to_yaml_string(),
            ConfigFormat::Json => self.to_json_string(),
        }
    }

    fn from_document(mut document: Value) -> Result<Self> {
        inherit_global_seed(&mut document);
        let config: Self = serde_json::from_value(document)
            .map_err(|e| Error::MalformedConfiguration(e.to_string()))?;
        config.checked()
    }

    fn checked(self) -> Result<Self> {
        validate_config(&self)?;
        for (group, seed) in self.seed_overrides() {
            warn!(
                group,
                seed,
                global_seed = self.global.random_state,
                "random_state differs from the global seed"
            );
        }
        Ok(self)
    }
}

/// Load, parse and validate a configuration file
///
/// `.json` files are parsed as JSON, everything else as YAML.
///
/// # Example
///
/// ```no_run
/// use allstar::config::load_config;
///
/// let config = load_config("experiment.yaml")?;
/// assert_eq!(config.random_forest_search.search_cv.scoring, "f1");
/// # Ok::<(), allstar::Error>(())
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ExperimentConfig> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path);
    debug!(path = %path.display(), ?format, "loading experiment config");

    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let config = ExperimentConfig::from_str_as(&content, format)?;

    debug!(
        project = %config.tracking.project,
        seed = config.global.random_state,
        "experiment config loaded"
    );
    Ok(config)
}

/// Serialize a configuration to `path`, choosing the format by extension
pub fn save_config<P: AsRef<Path>>(config: &ExperimentConfig, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path);
    let content = config.to_string_as(format)?;
    fs::write(path, content).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), ?format, "experiment config saved");
    Ok(())
}
