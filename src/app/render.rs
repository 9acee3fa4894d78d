//! Text and JSON rendering of audit outcomes.

use colored::*;
use serde_json::json;

use crate::app::session::AuditOutcome;
use crate::app::url::NormalizedUrl;
use crate::config::OutputFormat;
use crate::error_handling::RetrievalError;
use crate::models::{Report, Status};

fn colored_status(status: Status) -> ColoredString {
    match status {
        Status::Good => status.as_str().green(),
        Status::NeedsImprovement => status.as_str().yellow(),
        Status::Missing | Status::Thin => status.as_str().red(),
    }
}

/// Renders a report as human-readable text.
pub fn render_report(report: &Report) -> String {
    let mut out = Vec::new();
    out.push(format!("SEO report for {}", report.url().as_str().bold()));
    out.push(report.overview().to_string());
    out.push(String::new());

    out.push("Findings:".bold().to_string());
    for finding in report.findings() {
        out.push(format!(
            "  [{}] {}: {}",
            colored_status(finding.status()),
            finding.name(),
            finding.recommendation()
        ));
    }
    out.push(String::new());

    out.push(format!("Word count: {}", report.word_count()));
    if let (Some(score), Some(label)) = (report.score(), report.score_label()) {
        out.push(format!("Score: {score}/100 ({label})"));
    }
    out.push(String::new());

    out.push("Snapshot:".bold().to_string());
    for (key, value) in report.snapshot() {
        out.push(format!("  {key}: {value}"));
    }

    let actions = report.action_items();
    if !actions.is_empty() {
        out.push(String::new());
        out.push("Action items:".bold().to_string());
        for (i, action) in actions.iter().enumerate() {
            out.push(format!("  {}. {action}", i + 1));
        }
    }

    if let Some(escalation) = report.escalation() {
        out.push(String::new());
        out.push(escalation.to_string());
    }

    out.join("\n")
}

/// Renders the Ticket Mode fallback shown when a page cannot be retrieved.
pub fn render_fallback(url: &NormalizedUrl, ticket: &str, reason: &RetrievalError) -> String {
    format!(
        "We couldn't fetch {url} ({reason}).\n\
         This is normal: many sites block automated requests.\n\
         Use Ticket Mode to request a manual audit:\n\n{ticket}"
    )
}

/// Renders any outcome in the requested format.
///
/// # Errors
///
/// Returns a `serde_json::Error` if JSON serialization fails.
pub fn render_outcome(
    outcome: &AuditOutcome,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match (outcome, format) {
        (AuditOutcome::Report(report), OutputFormat::Text) => Ok(render_report(report)),
        (AuditOutcome::Report(report), OutputFormat::Json) => report.to_json_pretty(),
        (AuditOutcome::Fallback { url, ticket, reason }, OutputFormat::Text) => {
            Ok(render_fallback(url, ticket, reason))
        }
        (AuditOutcome::Fallback { url, ticket, reason }, OutputFormat::Json) => {
            serde_json::to_string_pretty(&json!({
                "url": url,
                "fallback": true,
                "reason": reason.to_string(),
                "status": reason.status(),
                "ticket": ticket,
            }))
        }
        (AuditOutcome::Rejected(error), OutputFormat::Text) => Ok(error.to_string()),
        (AuditOutcome::Rejected(error), OutputFormat::Json) => {
            serde_json::to_string_pretty(&json!({ "error": error.to_string() }))
        }
    }
}
