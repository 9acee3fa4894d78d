//! Ticket Mode: the manual audit request.
//!
//! A ticket is a plain-text payload the user submits for a hands-on review. It
//! is produced whenever the page cannot be retrieved, or on explicit request,
//! and involves no analysis.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::app::NormalizedUrl;
use crate::config::{TICKET_HEADER, TICKET_URL_PLACEHOLDER};

const TICKET_REQUESTS: &[&str] = &[
    "A clear SEO inspection summary",
    "Priority fixes (top 5)",
    "Quick wins vs deeper fixes",
    "Conversion notes (CTA + trust signals)",
];

const TICKET_NOTES: &[&str] = &[
    "Industry / location:",
    "Goal (calls, leads, sales):",
    "Competitors:",
];

/// Renders a ticket stamped with `now`.
pub fn generate_ticket(url: Option<&NormalizedUrl>, now: DateTime<Utc>) -> String {
    let target = url.map_or(TICKET_URL_PLACEHOLDER, NormalizedUrl::as_str);

    let mut lines = vec![
        TICKET_HEADER.to_string(),
        format!(
            "Timestamp: {}",
            now.to_rfc3339_opts(SecondsFormat::Millis, true)
        ),
        format!("Target URL: {target}"),
        String::new(),
        "What I want:".to_string(),
    ];
    lines.extend(TICKET_REQUESTS.iter().map(|item| format!("- {item}")));
    lines.push(String::new());
    lines.push("Notes (optional):".to_string());
    lines.extend(TICKET_NOTES.iter().map(|field| format!("- {field}")));

    lines.join("\n")
}

/// Renders a ticket stamped with the current time.
pub fn generate_ticket_now(url: Option<&NormalizedUrl>) -> String {
    generate_ticket(url, Utc::now())
}
