use crate::{ActionResult, Command};

/// Delivers a batch of commands to the game and reports one result per command.
///
/// The returned results are order-aligned with `batch`.
pub trait ActionTransport {
    fn send_actions(&mut self, batch: &[Command]) -> Vec<ActionResult>;
}

/// A transport that also owns the simulation clock.
pub trait StepTransport: ActionTransport {
    /// Advance the simulation by `game_loops`.
    fn step(&mut self, game_loops: u32);
}

impl<T: ActionTransport + ?Sized> ActionTransport for &mut T {
    fn send_actions(&mut self, batch: &[Command]) -> Vec<ActionResult> {
        (**self).send_actions(batch)
    }
}

impl<T: StepTransport + ?Sized> StepTransport for &mut T {
    fn step(&mut self, game_loops: u32) {
        (**self).step(game_loops)
    }
}
