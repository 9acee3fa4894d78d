//! Audit session: the shell-side state holder.
//!
//! A session runs normalize, fetch, then analyze, and falls back to Ticket
//! Mode when the page cannot be retrieved. It owns the only mutable state: a
//! monotonic request counter and the single "current outcome" slot. Only the
//! most recently begun audit may fill that slot; starting a new audit cancels
//! the fetch of the previous one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, info};
use tokio_util::sync::CancellationToken;

use crate::app::url::{normalize, NormalizedUrl};
use crate::audit::Auditor;
use crate::config::Config;
use crate::error_handling::{InitializationError, NormalizationError, RetrievalError};
use crate::fetch::Retriever;
use crate::models::Report;
use crate::ticket::generate_ticket_now;

/// Identifies one audit request within a session.
#[derive(Debug, Clone)]
pub struct RequestToken {
    id: u64,
    cancel: CancellationToken,
}

impl RequestToken {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// True once a newer request has been begun.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// What the shell shows for one audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditOutcome {
    /// The page was fetched and analyzed.
    Report(Report),
    /// The page could not be retrieved; the user gets a ticket instead.
    Fallback {
        url: NormalizedUrl,
        ticket: String,
        reason: RetrievalError,
    },
    /// The input was not a usable URL. Nothing was fetched.
    Rejected(NormalizationError),
}

impl AuditOutcome {
    pub fn url(&self) -> Option<&NormalizedUrl> {
        match self {
            AuditOutcome::Report(report) => Some(report.url()),
            AuditOutcome::Fallback { url, .. } => Some(url),
            AuditOutcome::Rejected(_) => None,
        }
    }

    pub fn report(&self) -> Option<&Report> {
        match self {
            AuditOutcome::Report(report) => Some(report),
            _ => None,
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Runs audits and keeps the outcome of the latest one.
#[derive(Debug)]
pub struct AuditSession {
    retriever: Retriever,
    auditor: Auditor,
    latest: AtomicU64,
    in_flight: Mutex<CancellationToken>,
    current: Mutex<Option<AuditOutcome>>,
}

impl AuditSession {
    pub fn new(retriever: Retriever, auditor: Auditor) -> Self {
        Self {
            retriever,
            auditor,
            latest: AtomicU64::new(0),
            in_flight: Mutex::new(CancellationToken::new()),
            current: Mutex::new(None),
        }
    }

    /// Builds a session with a retriever and rule set taken from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self::new(
            Retriever::new(config)?,
            Auditor::from(config.rule_set),
        ))
    }

    /// Starts a new request, superseding and cancelling any earlier one.
    pub fn begin(&self) -> RequestToken {
        let mut in_flight = lock(&self.in_flight);
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let cancel = CancellationToken::new();
        std::mem::replace(&mut *in_flight, cancel.clone()).cancel();
        debug!("Began audit request #{id}");
        RequestToken { id, cancel }
    }

    pub fn is_current(&self, token: &RequestToken) -> bool {
        token.id == self.latest.load(Ordering::SeqCst)
    }

    /// Stores `outcome` as the current outcome if `token` is still the latest
    /// request. Returns whether it was stored.
    pub fn complete(&self, token: &RequestToken, outcome: AuditOutcome) -> bool {
        let mut current = lock(&self.current);
        if !self.is_current(token) {
            debug!(
                "Discarding stale outcome of request #{} (latest is #{})",
                token.id,
                self.latest.load(Ordering::SeqCst)
            );
            return false;
        }
        *current = Some(outcome);
        true
    }

    /// Runs one full audit for `raw` input.
    ///
    /// Returns `None` if a newer request was begun before this one finished;
    /// its outcome is then discarded.
    pub async fn run(&self, raw: &str) -> Option<AuditOutcome> {
        let token = self.begin();

        let outcome = match normalize(raw) {
            Err(error) => {
                info!("Rejected input {raw:?}: {error}");
                AuditOutcome::Rejected(error)
            }
            Ok(url) => {
                let fetched = tokio::select! {
                    _ = token.cancel.cancelled() => {
                        debug!("Request #{} for {url} was superseded", token.id);
                        return None;
                    }
                    result = self.retriever.fetch(&url) => result,
                };

                match fetched {
                    Ok(markup) => AuditOutcome::Report(self.auditor.analyze(&url, &markup)),
                    Err(reason) => {
                        info!("Falling back to Ticket Mode for {url}: {reason}");
                        AuditOutcome::Fallback {
                            ticket: generate_ticket_now(Some(&url)),
                            url,
                            reason,
                        }
                    }
                }
            }
        };

        self.complete(&token, outcome.clone()).then_some(outcome)
    }

    /// The outcome of the latest completed request, if any.
    pub fn current(&self) -> Option<AuditOutcome> {
        lock(&self.current).clone()
    }
}
