//! Refresh scheduler - drives periodic and on-demand refresh passes
//!
//! The [`RefreshScheduler`] owns a [`SyncEngine`](crate::engine::SyncEngine)
//! and runs it on a fixed interval. A [`RefreshHandle`] lets the CLI or UI
//! request an immediate pass without waiting for the next tick.
//!
//! ## Flow
//!
//! ```text
//! RefreshHandle ──→ mpsc::Receiver ──→ RefreshScheduler ──→ SyncEngine::refresh()
//!                                          │
//!                                    interval timer
//! ```
//!
//! The loop terminates when every handle has been dropped, or immediately
//! when a refresh reports a signing failure, since no further pass can
//! succeed without new credentials.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::engine::SyncEngine;

/// Requests an immediate refresh from outside the scheduler loop
#[derive(Clone)]
pub struct RefreshHandle {
    tx: mpsc::Sender<()>,
}

impl RefreshHandle {
    /// Asks the running scheduler to refresh as soon as possible
    ///
    /// Returns false when the scheduler has already stopped. Requests
    /// arriving while a pass is in flight coalesce into one follow-up pass.
    pub fn request_refresh(&self) -> bool {
        match self.tx.try_send(()) {
            Ok(()) => true,
            // A queued request already guarantees a follow-up pass.
            Err(mpsc::error::TrySendError::Full(())) => true,
            Err(mpsc::error::TrySendError::Closed(())) => false,
        }
    }
}

/// Schedules refresh passes on an interval, with on-demand triggers
pub struct RefreshScheduler {
    engine: SyncEngine,
    request_rx: mpsc::Receiver<()>,
    interval: Duration,
}

impl RefreshScheduler {
    /// Creates a scheduler around `engine`, refreshing every `interval`
    ///
    /// Returns the scheduler and a cloneable handle for on-demand requests.
    pub fn new(engine: SyncEngine, interval: Duration) -> (Self, RefreshHandle) {
        // Capacity 1: pending requests coalesce instead of queueing up.
        let (tx, request_rx) = mpsc::channel(1);

        info!(
            interval_secs = interval.as_secs(),
            "Creating refresh scheduler"
        );

        let scheduler = Self {
            engine,
            request_rx,
            interval,
        };
        (scheduler, RefreshHandle { tx })
    }

    /// Main scheduler loop
    ///
    /// Runs an initial pass immediately, then alternates between interval
    /// ticks and on-demand requests. Returns when all handles are dropped
    /// or when the engine reports that requests can no longer be signed.
    pub async fn run(mut self) {
        info!("Refresh scheduler starting");

        let mut timer = tokio::time::interval(self.interval);

        loop {
            tokio::select! {
                request = self.request_rx.recv() => {
                    match request {
                        Some(()) => {
                            debug!("On-demand refresh requested");
                            timer.reset();
                            if !self.run_pass().await {
                                break;
                            }
                        }
                        None => {
                            info!("All refresh handles dropped, scheduler shutting down");
                            break;
                        }
                    }
                }

                _ = timer.tick() => {
                    debug!("Interval refresh due");
                    if !self.run_pass().await {
                        break;
                    }
                }
            }
        }

        info!("Refresh scheduler stopped");
    }

    /// Runs one pass; returns false when the loop must stop
    async fn run_pass(&mut self) -> bool {
        match self.engine.refresh().await {
            Ok(state) => {
                debug!(?state, "Refresh pass finished");
                true
            }
            Err(_) => {
                warn!("Stopping scheduler: store requests cannot be signed");
                false
            }
        }
    }
}
