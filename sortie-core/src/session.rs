use crate::config::{ConfigError, SessionConfig};
use crate::queue::{ActionQueue, FlushSummary};
use crate::transport::StepTransport;
use sortie_core_macros::OpaqueDebug;

/// Runs before the queue is flushed on each step.
pub type BeforeStepFn = Box<dyn FnMut(&mut ActionQueue)>;

/// One bot session: the transport, its action queue, and the step loop that
/// flushes the queue before every simulation step.
#[derive(OpaqueDebug)]
pub struct Session<T: StepTransport> {
    #[opaque]
    transport: T,
    actions: ActionQueue,
    #[opaque]
    before_step: Vec<BeforeStepFn>,
    game_loops: u32,
    steps: u64,
}

impl<T: StepTransport> Session<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            actions: ActionQueue::new(),
            before_step: Vec::new(),
            game_loops: 1,
            steps: 0,
        }
    }

    pub fn from_config(transport: T, config: &SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut session = Self::new(transport);
        session.game_loops = config.step.game_loops;
        if config.actions.log_errors {
            session.actions.log_action_errors();
        }
        Ok(session)
    }

    pub fn actions(&self) -> &ActionQueue {
        &self.actions
    }

    pub fn actions_mut(&mut self) -> &mut ActionQueue {
        &mut self.actions
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Game loops advanced per step.
    pub fn game_loops(&self) -> u32 {
        self.game_loops
    }

    /// Completed steps since the session started.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Register a hook that runs, in registration order, before each flush.
    pub fn on_before_step(&mut self, hook: impl FnMut(&mut ActionQueue) + 'static) {
        self.before_step.push(Box::new(hook));
    }

    /// Send queued actions now instead of waiting for the next step.
    pub fn send_actions(&mut self) -> FlushSummary {
        self.actions.flush(&mut self.transport)
    }

    /// Flush queued actions, then advance the simulation.
    pub fn step(&mut self) -> FlushSummary {
        for hook in &mut self.before_step {
            hook(&mut self.actions);
        }
        let summary = self.actions.flush(&mut self.transport);
        self.transport.step(self.game_loops);
        self.steps += 1;
        tracing::trace!(
            target: "sortie-core::Step",
            step = self.steps,
            game_loops = self.game_loops,
            sent = summary.sent,
            "Step({})",
            self.steps
        );
        summary
    }
}
