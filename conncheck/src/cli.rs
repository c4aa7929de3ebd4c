//! Command-line surface.

use clap::Parser;

use crate::core::config::{AppConfig, DEFAULT_ITERATIONS, DEFAULT_PROJECT_NAME};
use crate::io::environment::LONG_VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "conncheck",
    version,
    long_version = LONG_VERSION,
    about = "A tiny CLI that prints a diagnostic report for Git testing"
)]
pub struct Cli {
    /// Name used in the generated report.
    #[arg(long, default_value = DEFAULT_PROJECT_NAME)]
    pub project_name: String,

    /// Number of simulated steps to include in the report.
    #[arg(long, default_value_t = DEFAULT_ITERATIONS, allow_negative_numbers = true)]
    pub iterations: i64,

    /// Include selected environment variables.
    #[arg(long)]
    pub show_env: bool,

    /// Print the report as formatted JSON.
    #[arg(long = "json")]
    pub output_json: bool,
}

impl Cli {
    /// Normalize parsed arguments into the immutable run configuration.
    pub fn into_config(self) -> AppConfig {
        AppConfig::new(
            self.project_name,
            self.iterations,
            self.show_env,
            self.output_json,
        )
    }
}
