//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and library configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which set of checks an audit runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RuleSetKind {
    /// Title, meta description, H1, word count and canonical checks
    Standard,
    /// Standard checks plus viewport, social tags, image alt text and a score
    Extended,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// Pretty-printed JSON dump of the report
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use seo_inspector::Config;
///
/// let config = Config {
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Fetch timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Checks to run
    pub rule_set: RuleSetKind,

    /// How the report is printed
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            rule_set: RuleSetKind::Standard,
            output: OutputFormat::Text,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// seo_inspector example.com
///
/// # All checks, with a score, as JSON
/// seo_inspector https://example.com --rule-set extended --output json
///
/// # Skip the fetch and print a ticket for manual submission
/// seo_inspector example.com --ticket
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "seo_inspector",
    about = "Audits the on-page SEO signals of a single URL."
)]
pub struct Opt {
    /// URL to audit (https:// is added when no scheme is given)
    #[arg(required_unless_present = "ticket")]
    pub url: Option<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Fetch timeout in seconds (at least 1)
    #[arg(
        long,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Checks to run: standard|extended
    #[arg(long, value_enum, default_value_t = RuleSetKind::Standard)]
    pub rule_set: RuleSetKind,

    /// Report format: text|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Print a manual audit ticket without fetching the page
    #[arg(long)]
    pub ticket: bool,
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Self {
            log_level: opt.log_level.clone(),
            log_format: opt.log_format.clone(),
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent.clone(),
            rule_set: opt.rule_set,
            output: opt.output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.timeout_seconds, 15);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.rule_set, RuleSetKind::Standard);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_config_from_opt() {
        let opt = Opt::parse_from([
            "seo_inspector",
            "example.com",
            "--timeout-seconds",
            "3",
            "--rule-set",
            "extended",
            "--output",
            "json",
        ]);
        let config = Config::from(&opt);
        assert_eq!(config.timeout_seconds, 3);
        assert_eq!(config.rule_set, RuleSetKind::Extended);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(opt.url.as_deref(), Some("example.com"));
        assert!(!opt.ticket);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(Opt::try_parse_from(["seo_inspector", "x.com", "--timeout-seconds", "0"]).is_err());
        let opt =
            Opt::try_parse_from(["seo_inspector", "x.com", "--timeout-seconds", "1"]).unwrap();
        assert_eq!(opt.timeout_seconds, 1);
    }

    #[test]
    fn test_url_required_unless_ticket() {
        assert!(Opt::try_parse_from(["seo_inspector"]).is_err());
        let opt = Opt::try_parse_from(["seo_inspector", "--ticket"]).unwrap();
        assert!(opt.ticket);
        assert_eq!(opt.url, None);
    }
}
