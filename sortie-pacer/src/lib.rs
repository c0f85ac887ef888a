//! sortie-pacer: real-time step pacing for sortie sessions.
//!
//! Steps a [`Session`] on a fixed wall-clock rate instead of as fast as the
//! transport allows. Ticks that fall behind are delayed rather than burst, so
//! the game never sees two steps back to back to catch up.

use serde::Deserialize;
use sortie_core::{FlushSummary, Session, StepTransport};
use std::time::Duration;
use thiserror::Error;
use tokio::time::{interval, MissedTickBehavior};

/// Steps per second of the game's "faster" real-time speed.
pub const FASTER_STEPS_PER_SECOND: f64 = 22.4;

#[derive(Debug, Error, PartialEq)]
pub enum PacerError {
    #[error("steps_per_second must give a non-zero, representable period, got {0}")]
    InvalidRate(f64),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PacerConfig {
    pub steps_per_second: f64,
}

impl Default for PacerConfig {
    fn default() -> Self {
        Self {
            steps_per_second: FASTER_STEPS_PER_SECOND,
        }
    }
}

/// Totals from one [`Pacer::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PacerReport {
    pub steps: u64,
    pub sent: usize,
    pub rejected: usize,
}

impl PacerReport {
    fn record(&mut self, summary: FlushSummary) {
        self.steps += 1;
        self.sent += summary.sent;
        self.rejected += summary.rejected;
    }
}

/// Drives `Session::step` on a tokio interval.
#[derive(Clone, Debug)]
pub struct Pacer {
    period: Duration,
}

impl Pacer {
    pub fn new(config: &PacerConfig) -> Result<Self, PacerError> {
        let rate = config.steps_per_second;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(PacerError::InvalidRate(rate));
        }
        let period = Duration::try_from_secs_f64(1.0 / rate)
            .map_err(|_| PacerError::InvalidRate(rate))?;
        if period.is_zero() {
            return Err(PacerError::InvalidRate(rate));
        }
        Ok(Self { period })
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Step `session` `steps` times, one step per tick.
    ///
    /// The first step happens immediately.
    pub async fn run<T: StepTransport>(
        &self,
        session: &mut Session<T>,
        steps: u64,
    ) -> PacerReport {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut report = PacerReport::default();
        for _ in 0..steps {
            ticker.tick().await;
            let summary = session.step();
            tracing::debug!(
                target: "sortie-pacer::Tick",
                step = session.steps(),
                sent = summary.sent,
                rejected = summary.rejected,
                "Tick"
            );
            report.record(summary);
        }

        tracing::info!(
            target: "sortie-pacer::Run",
            steps = report.steps,
            sent = report.sent,
            rejected = report.rejected,
            "pacer finished"
        );
        report
    }
}
