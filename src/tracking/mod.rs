//! Experiment-tracking target
//!
//! Resolves the `tracking` section into where runs are recorded and which
//! hyperparameters are attached to them. Parameters are flattened into
//! dotted `group.field` keys with string-encoded values. Talking to the
//! tracking service is left to the consumer.
//!
//! # Example
//!
//! ```
//! use allstar::config::ExperimentConfig;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let config = ExperimentConfig::default();
//! let target = config.tracking_target()?.expect("tracking is enabled by default");
//! assert_eq!(target.run_path, "nba-all-star");
//! assert!(target.params.iter().any(|(k, v)| k == "global.test_size" && v == "0.2"));
//! # Ok(())
//! # }
//! ```


use serde_json::Value;

use crate::config::{ExperimentConfig, TrackingSettings};
use crate::error::{Error, Result};

/// Rendering of absent optional values in flattened parameters
const NONE_PARAM: &str = "None";

impl TrackingSettings {
    /// Whether runs should be recorded
    pub fn is_active(&self) -> bool {
        self.enabled
    }

    /// `entity/project`, or just `project` when no entity is set
    pub fn run_path(&self) -> String {
        match &self.entity {
            Some(entity) => format!("{entity}/{}", self.project),
            None => self.project.clone(),
        }
    }
}

/// Where a run is recorded and the parameters logged with it
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingTarget {
    pub project: String,
    pub entity: Option<String>,
    pub run_path: String,
    /// Flattened `(group.field, value)` pairs in config order
    pub params: Vec<(String, String)>,
}

impl ExperimentConfig {
    /// Flattened hyperparameters for a tracked run's config
    pub fn run_params(&self) -> Result<Vec<(String, String)>> {
        let value = serde_json::to_value(self).map_err(|e| Error::Serialization(e.to_string()))?;
        let mut params = Vec::new();
        flatten_into(&mut params, String::new(), &value);
        Ok(params)
    }

    /// Tracking target for this experiment, or `None` when tracking is disabled
    pub fn tracking_target(&self) -> Result<Option<TrackingTarget>> {
        if !self.tracking.is_active() {
            return Ok(None);
        }
        Ok(Some(TrackingTarget {
            project: self.tracking.project.clone(),
            entity: self.tracking.entity.clone(),
            run_path: self.tracking.run_path(),
            params: self.run_params()?,
        }))
    }
}

fn flatten_into(out: &mut Vec<(String, String)>, prefix: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() { key.clone() } else { format!("{prefix}.{key}") };
                flatten_into(out, path, child);
            }
        }
        leaf => out.push((prefix, render_param(leaf))),
    }
}

fn render_param(value: &Value) -> String {
    match value {
        Value::Null => NONE_PARAM.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let rendered: Vec<String> = items.iter().map(render_param).collect();
            format!("[{}]", rendered.join(", "))
        }
        other => other.to_string(),
    }
}
