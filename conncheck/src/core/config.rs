//! Immutable run configuration.

/// Report title used when `--project-name` is not given.
pub const DEFAULT_PROJECT_NAME: &str = "Git Connection Test";

/// Number of synthesized steps when `--iterations` is not given.
pub const DEFAULT_ITERATIONS: i64 = 3;

/// Lower bound applied to any requested iteration count.
pub const MIN_ITERATIONS: u64 = 1;

/// Configuration for a single report run.
///
/// Built once from the command line and never mutated afterwards. The
/// iteration count is already clamped, so consumers can rely on
/// `iterations >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub project_name: String,
    pub iterations: u64,
    pub show_env: bool,
    pub output_json: bool,
}

impl AppConfig {
    /// Build a configuration, flooring `iterations` at [`MIN_ITERATIONS`].
    ///
    /// Zero and negative counts are accepted and silently become 1.
    pub fn new(
        project_name: impl Into<String>,
        iterations: i64,
        show_env: bool,
        output_json: bool,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            iterations: clamp_iterations(iterations),
            show_env,
            output_json,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PROJECT_NAME, DEFAULT_ITERATIONS, false, false)
    }
}

/// Floor a requested iteration count at [`MIN_ITERATIONS`].
pub fn clamp_iterations(requested: i64) -> u64 {
    u64::try_from(requested)
        .unwrap_or(MIN_ITERATIONS)
        .max(MIN_ITERATIONS)
}
