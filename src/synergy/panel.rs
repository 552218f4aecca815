// src/synergy/panel.rs
use tokio_util::sync::CancellationToken;

use crate::models::{AnalysisResult, PanelSnapshot};

pub type Ticket = u64;

/// Why a submission did not start a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    BlankInput,
    InFlight,
    TornDown,
}

/// A request the panel has committed to. The outcome must be handed back
/// through [`SynergyPanel::settle`] with the same ticket.
#[derive(Debug)]
pub struct PendingRequest {
    pub ticket: Ticket,
    pub job_description: String,
    pub cancel: CancellationToken,
}

/// View state of the synergy section for one open page.
#[derive(Debug)]
pub struct SynergyPanel {
    job_description: String,
    in_flight: bool,
    result: Option<AnalysisResult>,
    active: Option<Ticket>,
    next_ticket: Ticket,
    lifetime: CancellationToken,
}

impl Default for SynergyPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl SynergyPanel {
    pub fn new() -> Self {
        Self {
            job_description: String::new(),
            in_flight: false,
            result: None,
            active: None,
            next_ticket: 0,
            lifetime: CancellationToken::new(),
        }
    }

    /// Starts a submission: marks the panel in flight and clears the
    /// previous result. Blank input and submissions while a request is
    /// outstanding leave the panel untouched.
    pub fn begin_submit(&mut self, job_description: &str) -> Result<PendingRequest, SubmitRejection> {
        if self.lifetime.is_cancelled() {
            return Err(SubmitRejection::TornDown);
        }
        if job_description.trim().is_empty() {
            return Err(SubmitRejection::BlankInput);
        }
        if self.in_flight {
            return Err(SubmitRejection::InFlight);
        }

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.job_description = job_description.to_string();
        self.in_flight = true;
        self.result = None;
        self.active = Some(ticket);

        Ok(PendingRequest {
            ticket,
            job_description: self.job_description.clone(),
            cancel: self.lifetime.child_token(),
        })
    }

    /// Applies an outcome if `ticket` is still the active request.
    /// Returns `false` when the outcome was discarded.
    pub fn settle(&mut self, ticket: Ticket, result: AnalysisResult) -> bool {
        if self.lifetime.is_cancelled() || self.active != Some(ticket) {
            log::debug!("Discarding stale synergy outcome for ticket {}", ticket);
            return false;
        }
        self.result = Some(result);
        self.in_flight = false;
        self.active = None;
        true
    }

    /// Releases the claim of `ticket` without applying an outcome, so the
    /// panel accepts the next submission. Returns `false` if `ticket` was
    /// no longer active.
    pub fn abandon(&mut self, ticket: Ticket) -> bool {
        if self.active != Some(ticket) {
            return false;
        }
        self.in_flight = false;
        self.active = None;
        true
    }

    /// Cancels any outstanding request; later outcomes are discarded.
    pub fn teardown(&mut self) {
        self.lifetime.cancel();
        self.in_flight = false;
        self.active = None;
    }

    pub fn is_torn_down(&self) -> bool {
        self.lifetime.is_cancelled()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot {
            in_flight: self.in_flight,
            result: self.result.clone(),
            score_label: self
                .result
                .as_ref()
                .and_then(AnalysisResult::score)
                .map(|s| s.score_label()),
        }
    }
}
