//! URL validation and normalization utilities.

use std::fmt;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::Serialize;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::NormalizationError;

/// Any `scheme://` prefix, recognized or not.
static SCHEME_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").unwrap_or_else(|e| {
        panic!("Failed to compile SCHEME_PREFIX_RE: {e}. This is a programming error.")
    })
});

/// An absolute http(s) URL produced by [`normalize`].
///
/// Never empty, always scheme-prefixed, always has a host. The wrapped string
/// is the URL parser's serialization, so `example.com` becomes
/// `https://example.com/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedUrl(String);

impl NormalizedUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Host component, used for log context.
    pub fn host(&self) -> String {
        url::Url::parse(&self.0)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_default()
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validates and normalizes user input into an absolute URL.
///
/// Trims surrounding whitespace, adds an `https://` prefix when the input has no
/// `http://` or `https://` prefix, then parses the result with the WHATWG URL
/// rules implemented by the `url` crate. The parsed URL must use http or https
/// and must have a host. Single-label hosts such as `notaurl` are accepted;
/// hosts containing raw spaces or other forbidden characters are rejected.
///
/// # Arguments
///
/// * `raw` - The URL string typed by the user
///
/// # Errors
///
/// - `NormalizationError::EmptyInput` if the input is blank
/// - `NormalizationError::InvalidUrl` if the input is too long, uses another
///   scheme, or does not parse
pub fn normalize(raw: &str) -> Result<NormalizedUrl, NormalizationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NormalizationError::EmptyInput);
    }

    // Check URL length before normalization to prevent DoS
    if trimmed.len() > MAX_URL_LENGTH {
        return Err(NormalizationError::InvalidUrl(format!(
            "URL exceeds maximum length ({} > {MAX_URL_LENGTH})",
            trimmed.len()
        )));
    }

    let lower = trimmed.to_ascii_lowercase();
    let prefixed = if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else if SCHEME_PREFIX_RE.is_match(trimmed) {
        return Err(NormalizationError::InvalidUrl(format!(
            "unsupported scheme in {trimmed}"
        )));
    } else {
        format!("https://{trimmed}")
    };

    if prefixed.len() > MAX_URL_LENGTH {
        return Err(NormalizationError::InvalidUrl(format!(
            "URL exceeds maximum length ({} > {MAX_URL_LENGTH})",
            prefixed.len()
        )));
    }

    let parsed = url::Url::parse(&prefixed)
        .map_err(|e| NormalizationError::InvalidUrl(format!("{e}")))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(NormalizationError::InvalidUrl(format!(
                "unsupported scheme: {other}"
            )))
        }
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(NormalizationError::InvalidUrl("missing host".to_string())),
    }

    debug!("Normalized {trimmed:?} to {parsed}");
    Ok(NormalizedUrl(parsed.to_string()))
}
