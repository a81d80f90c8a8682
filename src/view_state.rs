//! Per-Page View State
//!
//! Holds what a page last loaded plus its fetch lifecycle. Every load is
//! tagged with a ticket; only the response for the newest ticket is applied,
//! so an earlier slow response can never overwrite a later one.

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Ready,
    /// Last load failed; data is whatever the previous success left.
    Failed,
}

/// Generation of a single load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Applied,
    Failed,
    /// A newer load was started; this response was dropped.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<T> {
    label: &'static str,
    data: T,
    phase: LoadPhase,
    latest: u64,
}

impl<T> ViewState<T> {
    pub fn new(label: &'static str, initial: T) -> Self {
        Self {
            label,
            data: initial,
            phase: LoadPhase::Idle,
            latest: 0,
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    #[cfg(test)]
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Start a load and hand out its ticket.
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.phase = LoadPhase::Loading;
        log::debug!("[{}] load #{} started", self.label, self.latest);
        Ticket(self.latest)
    }

    /// Apply the outcome of the load identified by `ticket`.
    ///
    /// Success replaces the data wholesale. Failure is logged and keeps the
    /// previous data on screen.
    pub fn settle(&mut self, ticket: Ticket, outcome: Result<T, ApiError>) -> Settled {
        if ticket.0 != self.latest {
            log::debug!("[{}] dropping stale load #{} (latest #{})", self.label, ticket.0, self.latest);
            return Settled::Stale;
        }
        match outcome {
            Ok(data) => {
                self.data = data;
                self.phase = LoadPhase::Ready;
                Settled::Applied
            }
            Err(e) => {
                log::error!("[{}] load failed: {}", self.label, e);
                self.phase = LoadPhase::Failed;
                Settled::Failed
            }
        }
    }
}
