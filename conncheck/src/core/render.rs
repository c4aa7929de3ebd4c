//! Text and JSON rendering of a [`Report`].

use anyhow::{Context, Result};

use crate::core::report::Report;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(output_json: bool) -> Self {
        if output_json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Render `report` in the requested format. The result has no trailing newline.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

/// Pretty JSON with two-space indentation and keys sorted at every level.
///
/// Going through [`serde_json::Value`] sorts object keys, since its map type
/// is ordered by key.
pub fn render_json(report: &Report) -> Result<String> {
    let value = serde_json::to_value(report).context("convert report to json")?;
    serde_json::to_string_pretty(&value).context("serialize report json")
}

/// Fixed human-readable layout.
pub fn render_text(report: &Report) -> String {
    let env = &report.environment;
    let mut lines = vec![
        format!("Project: {}", report.project),
        report.message.clone(),
        String::new(),
        "Environment:".to_string(),
        format!("  Timestamp: {}", env.timestamp),
        format!("  Runtime: {}", env.runtime_version),
        format!("  Executable: {}", env.executable),
        format!("  Platform: {}", env.platform),
        format!("  CWD: {}", env.current_directory),
        String::new(),
        "Steps:".to_string(),
    ];
    lines.extend(report.steps.iter().map(|step| {
        format!(
            "  - {} | status={} | duration_ms={}",
            step.title,
            step.status.as_str(),
            step.duration_ms
        )
    }));
    if let Some(vars) = &report.environment_variables {
        lines.push(String::new());
        lines.push("Environment Variables:".to_string());
        lines.extend(vars.iter().map(|(key, value)| format!("  {key}={value}")));
    }
    lines.join("\n")
}
