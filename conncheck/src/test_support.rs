//! Test-only fixtures with deterministic values.

use crate::core::report::{EnvVars, EnvironmentSnapshot};

/// Snapshot with fixed values, independent of the running process.
pub fn fixed_environment() -> EnvironmentSnapshot {
    EnvironmentSnapshot {
        timestamp: "2024-05-01T12:00:00.000000+00:00".to_string(),
        runtime_version: "1.85.0".to_string(),
        executable: "/opt/bin/conncheck".to_string(),
        platform: "linux-6.8.0-x86_64".to_string(),
        current_directory: "/work/repo".to_string(),
    }
}

/// Build an ordered variable set from `(key, value)` pairs.
pub fn env_vars(pairs: &[(&str, &str)]) -> EnvVars {
    let mut vars = EnvVars::new();
    for (key, value) in pairs {
        vars.push(*key, *value);
    }
    vars
}
