//! Report aggregate assembled from configuration, environment facts, and steps.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::core::config::AppConfig;
use crate::core::steps::{StepRecord, synthesize_steps};

/// Fixed message confirming the tool ran.
pub const SUCCESS_MESSAGE: &str = "Hello, Git! Connection test successful.";

/// Facts about the running process captured at report-build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentSnapshot {
    /// UTC capture time, RFC 3339.
    pub timestamp: String,
    pub runtime_version: String,
    pub executable: String,
    pub platform: String,
    pub current_directory: String,
}

/// Allowlisted environment variables, kept in collection order.
///
/// Serializes as a JSON object. Only variables that were set (and non-empty)
/// in the process are ever inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVars {
    entries: Vec<(String, String)>,
}

impl EnvVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    #[cfg(test)]
    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[cfg(test)]
    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for EnvVars {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// The complete report for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub project: String,
    pub message: String,
    pub environment: EnvironmentSnapshot,
    pub steps: Vec<StepRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_variables: Option<EnvVars>,
}

/// Assemble the report for `config`.
///
/// `env_vars` is attached only when `config.show_env` is set; otherwise it is
/// dropped so the report carries no variable section at all.
pub fn build_report(
    config: &AppConfig,
    environment: EnvironmentSnapshot,
    env_vars: Option<EnvVars>,
) -> Report {
    Report {
        project: config.project_name.clone(),
        message: SUCCESS_MESSAGE.to_string(),
        environment,
        steps: synthesize_steps(config.iterations),
        environment_variables: if config.show_env {
            Some(env_vars.unwrap_or_default())
        } else {
            None
        },
    }
}
