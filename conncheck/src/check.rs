//! Orchestration for a single report run.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

use crate::core::config::AppConfig;
use crate::core::render::{OutputFormat, render};
use crate::core::report::{Report, build_report};
use crate::io::environment::{collect_env_vars, collect_environment};

/// Collect environment facts and assemble the report for `config`.
pub fn assemble(config: &AppConfig) -> Report {
    let environment = collect_environment();
    let env_vars = config.show_env.then(collect_env_vars);
    let report = build_report(config, environment, env_vars);
    debug!(steps = report.steps.len(), "report assembled");
    report
}

/// Build, render, and write the report as a single write to `out`.
#[instrument(skip_all, fields(project = %config.project_name, iterations = config.iterations))]
pub fn run_check<W: Write>(config: &AppConfig, out: &mut W) -> Result<()> {
    info!("report run started");
    let report = assemble(config);
    let format = OutputFormat::from_json_flag(config.output_json);
    let mut rendered = render(&report, format)?;
    rendered.push('\n');
    out.write_all(rendered.as_bytes()).context("write report")?;
    out.flush().context("flush report")?;
    debug!(?format, bytes = rendered.len(), "report written");
    Ok(())
}
