#![allow(dead_code)]

use sortie_core::{ActionResult, ActionTransport, Command, StepTransport};

/// Records every batch and step; answers with scripted results.
#[derive(Default)]
pub struct FakeTransport {
    pub batches: Vec<Vec<Command>>,
    pub steps: Vec<u32>,
    /// Consumed front to back, one entry per command; missing entries succeed.
    pub script: Vec<ActionResult>,
    /// Events in call order, to check flush-before-step ordering.
    pub log: Vec<String>,
}

impl FakeTransport {
    pub fn rejecting(script: Vec<ActionResult>) -> Self {
        Self {
            script,
            ..Self::default()
        }
    }
}

impl ActionTransport for FakeTransport {
    fn send_actions(&mut self, batch: &[Command]) -> Vec<ActionResult> {
        self.batches.push(batch.to_vec());
        self.log.push(format!("send:{}", batch.len()));
        batch
            .iter()
            .map(|_| {
                if self.script.is_empty() {
                    ActionResult::Success
                } else {
                    self.script.remove(0)
                }
            })
            .collect()
    }
}

impl StepTransport for FakeTransport {
    fn step(&mut self, game_loops: u32) {
        self.steps.push(game_loops);
        self.log.push(format!("step:{game_loops}"));
    }
}

/// Returns a fixed result list regardless of batch size.
pub struct FixedTransport(pub Vec<ActionResult>);

impl ActionTransport for FixedTransport {
    fn send_actions(&mut self, _batch: &[Command]) -> Vec<ActionResult> {
        self.0.clone()
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
