//! Environment collector: local introspection of the running process.
//!
//! Nothing here fails. Facts that cannot be read are logged and reported as
//! [`UNKNOWN`]; unset variables are left out.

use std::io;
use std::path::PathBuf;

use chrono::{DateTime, SecondsFormat, Utc};
use sysinfo::System;
use tracing::{debug, warn};

use crate::core::report::{EnvVars, EnvironmentSnapshot};

/// Placeholder for facts the process could not report.
pub const UNKNOWN: &str = "unknown";

/// Variables read when `--show-env` is given, in collection order.
pub const ENV_ALLOWLIST: [&str; 4] = ["USER", "SHELL", "LANG", "TERM"];

/// `rustc --version` output of the compiler that built this binary.
pub const RUSTC_VERSION: &str = env!("CONNCHECK_RUSTC_VERSION");

/// Package version followed by the compiler version.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CONNCHECK_RUSTC_VERSION"),
    ")"
);

/// Capture the environment snapshot at the current instant.
pub fn collect_environment() -> EnvironmentSnapshot {
    collect_environment_at(Utc::now())
}

/// Capture the environment snapshot with an explicit timestamp.
pub fn collect_environment_at(now: DateTime<Utc>) -> EnvironmentSnapshot {
    let snapshot = EnvironmentSnapshot {
        timestamp: format_timestamp(now),
        runtime_version: runtime_version().to_string(),
        executable: path_or_unknown("executable", std::env::current_exe()),
        platform: platform(),
        current_directory: path_or_unknown("current directory", std::env::current_dir()),
    };
    debug!(platform = %snapshot.platform, "environment collected");
    snapshot
}

/// Read the allowlisted variables from the process environment.
pub fn collect_env_vars() -> EnvVars {
    collect_env_vars_with(|key| std::env::var(key).ok())
}

/// Read the allowlisted variables through `lookup`, skipping unset or empty ones.
pub fn collect_env_vars_with<F>(lookup: F) -> EnvVars
where
    F: Fn(&str) -> Option<String>,
{
    let mut vars = EnvVars::new();
    for key in ENV_ALLOWLIST {
        match lookup(key) {
            Some(value) if !value.is_empty() => vars.push(key, value),
            _ => debug!(key, "variable not set"),
        }
    }
    vars
}

/// ISO-8601 / RFC 3339 UTC timestamp with microsecond precision and `+00:00`.
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// First whitespace-delimited token of a version string.
pub fn version_token(version: &str) -> &str {
    version.split_whitespace().next().unwrap_or(UNKNOWN)
}

/// Release of the Rust toolchain the binary runs on, e.g. `1.85.0`.
pub fn runtime_version() -> &'static str {
    rustc_release(RUSTC_VERSION)
}

/// Release token of a `rustc --version` line.
pub fn rustc_release(version: &str) -> &str {
    version_token(version.strip_prefix("rustc ").unwrap_or(version))
}

/// `<os>-<release>-<arch>` of the running host, e.g. `linux-6.8.0-x86_64`.
pub fn platform() -> String {
    let release = System::kernel_version();
    if release.is_none() {
        warn!("os release unavailable");
    }
    format_platform(
        std::env::consts::OS,
        release.as_deref(),
        std::env::consts::ARCH,
    )
}

pub fn format_platform(os: &str, release: Option<&str>, arch: &str) -> String {
    let release = release.map(str::trim).filter(|r| !r.is_empty());
    format!("{os}-{}-{arch}", release.unwrap_or(UNKNOWN))
}

fn path_or_unknown(what: &str, path: io::Result<PathBuf>) -> String {
    match path {
        Ok(path) => path.display().to_string(),
        Err(err) => {
            warn!(%err, "{what} unavailable");
            UNKNOWN.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::TimeZone;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn env_vars_follow_allowlist_order() {
        let vars = collect_env_vars_with(lookup_from(&[
            ("TERM", "xterm"),
            ("USER", "dev"),
            ("LANG", "C.UTF-8"),
        ]));
        let keys: Vec<&str> = vars.keys().collect();
        assert_eq!(keys, vec!["USER", "LANG", "TERM"]);
    }

    #[test]
    fn env_vars_skip_empty_and_foreign_keys() {
        let vars = collect_env_vars_with(lookup_from(&[
            ("USER", ""),
            ("SHELL", "/bin/zsh"),
            ("HOME", "/home/dev"),
        ]));
        let keys: Vec<&str> = vars.keys().collect();
        assert_eq!(keys, vec!["SHELL"]);
        assert_eq!(vars.get("SHELL"), Some("/bin/zsh"));
    }

    #[test]
    fn env_vars_empty_when_nothing_set() {
        assert!(collect_env_vars_with(|_| None).is_empty());
    }

    #[test]
    fn timestamp_is_utc_rfc3339() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 5).single().expect("valid");
        assert_eq!(format_timestamp(now), "2024-05-01T12:30:05.000000+00:00");
    }

    #[test]
    fn collected_timestamp_parses_back() {
        let snapshot = collect_environment();
        let parsed = DateTime::parse_from_rfc3339(&snapshot.timestamp).expect("rfc3339");
        assert_eq!(parsed.offset().local_minus_utc(), 0);
    }

    #[test]
    fn version_token_takes_first_word() {
        assert_eq!(version_token("3.11.4 (main, Jun  7 2023)"), "3.11.4");
        assert_eq!(version_token(LONG_VERSION), env!("CARGO_PKG_VERSION"));
        assert_eq!(version_token("   "), UNKNOWN);
    }

    #[test]
    fn rustc_release_strips_program_name() {
        assert_eq!(rustc_release("rustc 1.85.0 (4d91de4e4 2025-02-17)"), "1.85.0");
        assert_eq!(rustc_release("rustc 1.87.0-nightly (abc 2025-03-01)"), "1.87.0-nightly");
        assert_eq!(rustc_release("rustc unknown"), UNKNOWN);
    }

    #[test]
    fn runtime_version_is_compiler_semver() {
        let version = runtime_version();
        assert_ne!(version, env!("CARGO_PKG_VERSION"));
        let release = version.split('-').next().unwrap_or_default();
        let parts: Vec<&str> = release.split('.').collect();
        assert_eq!(parts.len(), 3, "{version}");
        assert!(parts.iter().all(|p| p.parse::<u64>().is_ok()), "{version}");
        assert!(LONG_VERSION.contains(RUSTC_VERSION));
    }

    #[test]
    fn format_platform_includes_release() {
        assert_eq!(
            format_platform("linux", Some("6.18.44-fc"), "x86_64"),
            "linux-6.18.44-fc-x86_64"
        );
        assert_eq!(format_platform("macos", Some("  "), "aarch64"), "macos-unknown-aarch64");
        assert_eq!(format_platform("linux", None, "x86_64"), "linux-unknown-x86_64");
    }

    #[test]
    fn snapshot_reports_platform_and_paths() {
        let snapshot = collect_environment();
        let target = format!("{}-", std::env::consts::OS);
        assert!(snapshot.platform.starts_with(&target), "{}", snapshot.platform);
        assert!(snapshot.platform.ends_with(std::env::consts::ARCH));
        if let Some(release) = System::kernel_version() {
            assert!(snapshot.platform.contains(release.trim()), "{}", snapshot.platform);
        }
        assert_ne!(snapshot.executable, UNKNOWN);
        assert_ne!(snapshot.current_directory, UNKNOWN);
    }
}
