// src/session.rs
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;
use tokio::time::Instant;
use uuid::Uuid;

use crate::models::PanelSnapshot;
use crate::providers::LlmProvider;
use crate::synergy::{SubmitRejection, SynergyAnalyzer, SynergyPanel, Ticket};

type SessionMap = HashMap<Uuid, Session>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("Session not found")]
    NotFound,

    #[error("An analysis is already in progress")]
    InFlight,

    #[error("Session was closed before the analysis finished")]
    Closed,
}

struct Session {
    panel: SynergyPanel,
    last_seen: Instant,
}

impl Session {
    fn new() -> Self {
        Self {
            panel: SynergyPanel::new(),
            last_seen: Instant::now(),
        }
    }

    fn touch(&mut self) {
        self.last_seen = Instant::now();
    }
}

fn abandon(sessions: &mut SessionMap, id: &Uuid, ticket: Ticket) {
    if let Some(session) = sessions.get_mut(id) {
        if session.panel.abandon(ticket) {
            log::warn!("Synergy request {} for session {} was dropped before it settled", ticket, id);
        }
    }
}

/// Held by a submission between `begin_submit` and `settle`. If the
/// submitting future is dropped first, the panel's in-flight claim is
/// released so the page can submit again.
struct InFlightGuard {
    sessions: Arc<RwLock<SessionMap>>,
    id: Uuid,
    ticket: Ticket,
    armed: bool,
}

impl InFlightGuard {
    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let (id, ticket) = (self.id, self.ticket);
        if let Ok(mut sessions) = self.sessions.try_write() {
            abandon(&mut sessions, &id, ticket);
            return;
        }
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let sessions = self.sessions.clone();
                handle.spawn(async move {
                    abandon(&mut *sessions.write().await, &id, ticket);
                });
            }
            Err(_) => log::warn!(
                "Could not release synergy request {} for session {}: no runtime",
                ticket,
                id
            ),
        }
    }
}

/// One synergy panel per open page.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<SessionMap>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, Session::new());
        log::debug!("Opened session {}", id);
        id
    }

    /// Tears the panel down and forgets the session.
    pub async fn close(&self, id: &Uuid) -> bool {
        match self.sessions.write().await.remove(id) {
            Some(mut session) => {
                session.panel.teardown();
                log::debug!("Closed session {}", id);
                true
            }
            None => false,
        }
    }

    pub async fn close_all(&self) {
        let mut sessions = self.sessions.write().await;
        for session in sessions.values_mut() {
            session.panel.teardown();
        }
        sessions.clear();
    }

    pub async fn snapshot(&self, id: &Uuid) -> Option<PanelSnapshot> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(id)?;
        session.touch();
        Some(session.panel.snapshot())
    }

    /// Submits a job description on behalf of session `id` and waits for
    /// the outcome to be applied.
    ///
    /// Blank input returns the unchanged snapshot. The store's lock is not
    /// held while the model call is outstanding.
    pub async fn submit<P: LlmProvider>(
        &self,
        id: &Uuid,
        job_description: &str,
        analyzer: &SynergyAnalyzer<P>,
    ) -> Result<PanelSnapshot, SessionError> {
        let pending = {
            let mut sessions = self.sessions.write().await;
            let session = sessions.get_mut(id).ok_or(SessionError::NotFound)?;
            session.touch();
            match session.panel.begin_submit(job_description) {
                Ok(pending) => pending,
                Err(SubmitRejection::BlankInput) => return Ok(session.panel.snapshot()),
                Err(SubmitRejection::InFlight) => return Err(SessionError::InFlight),
                Err(SubmitRejection::TornDown) => return Err(SessionError::Closed),
            }
        };
        let mut guard = InFlightGuard {
            sessions: self.sessions.clone(),
            id: *id,
            ticket: pending.ticket,
            armed: true,
        };

        let result = analyzer
            .analyze(&pending.job_description, &pending.cancel)
            .await
            .map_err(|_| SessionError::Closed)?;

        let mut sessions = self.sessions.write().await;
        guard.disarm();
        let session = sessions.get_mut(id).ok_or(SessionError::Closed)?;
        if session.panel.settle(pending.ticket, result) {
            session.touch();
            Ok(session.panel.snapshot())
        } else {
            Err(SessionError::Closed)
        }
    }

    /// Closes sessions not seen for longer than `ttl`, cancelling any
    /// request still outstanding. Returns how many went.
    pub async fn sweep_idle(&self, ttl: Duration) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| {
            let keep = now.duration_since(session.last_seen) < ttl;
            if !keep {
                session.panel.teardown();
            }
            keep
        });
        let swept = before - sessions.len();
        if swept > 0 {
            log::info!("🧹 Expired {} idle session(s)", swept);
        }
        swept
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
