//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_inspector` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use seo_inspector::app::render_outcome;
use seo_inspector::config::Opt;
use seo_inspector::initialization::init_logger_with;
use seo_inspector::{generate_ticket_now, normalize, AuditOutcome, AuditSession, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();
    let config = Config::from(&opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let raw = opt.url.as_deref().unwrap_or_default();

    if opt.ticket {
        // An explicit ticket request never fails: an unusable URL becomes "(not provided)"
        let url = normalize(raw).ok();
        println!("{}", generate_ticket_now(url.as_ref()));
        return Ok(());
    }

    let session = AuditSession::from_config(&config).context("Failed to initialize HTTP client")?;

    let Some(outcome) = session.run(raw).await else {
        // Only one audit runs per process, so nothing can supersede it
        return Ok(());
    };

    let rendered =
        render_outcome(&outcome, config.output).context("Failed to render audit output")?;

    match outcome {
        AuditOutcome::Rejected(_) => {
            eprintln!("{rendered}");
            process::exit(1);
        }
        AuditOutcome::Report(_) | AuditOutcome::Fallback { .. } => {
            println!("{rendered}");
            Ok(())
        }
    }
}
