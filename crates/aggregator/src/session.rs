//! Dashboard session.
//!
//! Owns the "current token" and the latest view computed for it. Each
//! selection or refresh is tagged with a generation number; a result is
//! published only if its generation is still the newest, so a slow
//! aggregation for a previous token can never overwrite a newer one.
//!
//! Views are immutable and replaced whole through a `watch` channel, so
//! subscribers never observe a mix of two tokens' data.

use crate::aggregator::MetricsAggregator;
use chrono::{DateTime, Utc};
use market_pulse_core::{MarketSnapshot, Signal, Token};
use market_pulse_signals::SignalEngine;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;

/// Snapshot and signal for one token at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub token: Token,
    pub snapshot: MarketSnapshot,
    pub signal: Signal,
    pub updated_at: DateTime<Utc>,
}

/// State published to subscribers.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Incremented on every selection and refresh
    pub generation: u64,
    /// Currently selected token
    pub token: Option<Token>,
    /// Latest view for `token`, `None` while the first aggregation runs
    pub view: Option<Arc<DashboardView>>,
}

/// Current-token state machine over an aggregator and a signal engine.
#[derive(Debug)]
pub struct DashboardSession {
    aggregator: MetricsAggregator,
    engine: SignalEngine,
    state: watch::Sender<SessionState>,
}

impl DashboardSession {
    /// Creates a session with no token selected.
    #[must_use]
    pub fn new(aggregator: MetricsAggregator, engine: SignalEngine) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            aggregator,
            engine,
            state,
        }
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Returns the latest published view.
    #[must_use]
    pub fn current(&self) -> Option<Arc<DashboardView>> {
        self.state.borrow().view.clone()
    }

    /// Returns the selected token.
    #[must_use]
    pub fn current_token(&self) -> Option<Token> {
        self.state.borrow().token.clone()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.state.borrow().generation
    }

    /// Selects a token and aggregates it.
    ///
    /// The previous view is cleared immediately. Returns the new view, or
    /// `None` if another selection superseded this one before it finished.
    pub async fn select(&self, token: Token) -> Option<Arc<DashboardView>> {
        let mut generation = 0;
        self.state.send_modify(|state| {
            state.generation += 1;
            state.token = Some(token.clone());
            state.view = None;
            generation = state.generation;
        });

        tracing::debug!(token = %token, generation, "Token selected");
        self.run(generation, token).await
    }

    /// Re-aggregates the current token, keeping the old view until the new
    /// one is ready.
    ///
    /// Returns `None` if no token is selected or the refresh was superseded.
    pub async fn refresh(&self) -> Option<Arc<DashboardView>> {
        let mut selected = None;
        self.state.send_if_modified(|state| {
            let Some(token) = state.token.clone() else {
                return false;
            };
            state.generation += 1;
            selected = Some((state.generation, token));
            true
        });

        let (generation, token) = selected?;
        tracing::debug!(token = %token, generation, "Refreshing");
        self.run(generation, token).await
    }

    async fn run(&self, generation: u64, token: Token) -> Option<Arc<DashboardView>> {
        let snapshot = self.aggregator.get_snapshot(&token).await;
        let signal = self.engine.compute(&snapshot.signal_inputs());

        let view = Arc::new(DashboardView {
            token,
            snapshot,
            signal,
            updated_at: Utc::now(),
        });

        let published = self.state.send_if_modified(|state| {
            if state.generation != generation {
                return false;
            }
            state.view = Some(Arc::clone(&view));
            true
        });

        if published {
            tracing::info!(
                token = %view.token,
                label = %view.signal.label,
                score = view.signal.score,
                "Dashboard updated"
            );
            Some(view)
        } else {
            tracing::debug!(
                token = %view.token,
                generation,
                current = self.generation(),
                "Discarding stale aggregation"
            );
            None
        }
    }
}
