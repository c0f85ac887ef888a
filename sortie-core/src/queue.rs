use crate::handler::{tracing_handler, ErrorHandlerFn};
use crate::transport::ActionTransport;
use crate::units::{HasTag, Tags};
use crate::{AbilityId, ChatChannel, Command, Point, Point2D, Target, UnitOrder, UnitTag};
use sortie_core_macros::OpaqueDebug;
use std::sync::Arc;

/// Outcome of one [`ActionQueue::flush`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlushSummary {
    /// Commands handed to the transport.
    pub sent: usize,
    /// Commands the remote side reported as failed.
    pub rejected: usize,
}

impl FlushSummary {
    pub fn accepted(&self) -> usize {
        self.sent - self.rejected
    }
}

/// Pending commands for the current step, sent as one batch on flush.
///
/// Insertion order is send order. The queue is emptied by every flush,
/// whatever the transport reports.
#[derive(Default, OpaqueDebug)]
pub struct ActionQueue {
    pending: Vec<Command>,
    #[opaque]
    error_handler: Option<ErrorHandlerFn>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the handler called for each rejected command.
    pub fn set_error_handler(&mut self, handler: ErrorHandlerFn) {
        self.error_handler = Some(handler);
    }

    /// Convenience over [`set_error_handler`](Self::set_error_handler) for plain closures.
    pub fn on_action_error(
        &mut self,
        handler: impl Fn(&Command, crate::ActionResult) + Send + Sync + 'static,
    ) {
        self.set_error_handler(Arc::new(handler));
    }

    /// Drop the current handler; rejections are silently discarded again.
    pub fn clear_error_handler(&mut self) {
        self.error_handler = None;
    }

    /// Log every rejected command through `tracing`.
    pub fn log_action_errors(&mut self) {
        self.set_error_handler(tracing_handler());
    }

    pub fn has_error_handler(&self) -> bool {
        self.error_handler.is_some()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Commands waiting for the next flush, in send order.
    pub fn pending(&self) -> &[Command] {
        &self.pending
    }

    /// Append an already-built command. Unit orders without units are dropped.
    pub fn push(&mut self, command: Command) {
        if let Command::UnitOrder(order) = &command {
            if order.units.is_empty() {
                return;
            }
        }
        self.pending.push(command);
    }

    /// Send a message that all players can see.
    pub fn chat(&mut self, message: impl Into<String>) {
        self.push(Command::chat(ChatChannel::Broadcast, message));
    }

    /// Send a message that only teammates (and observers) can see.
    pub fn chat_team(&mut self, message: impl Into<String>) {
        self.push(Command::chat(ChatChannel::Team, message));
    }

    /// Center the camera on `center`.
    pub fn move_camera(&mut self, center: impl Into<Point>) {
        self.push(Command::camera_move(center));
    }

    /// Order every unit in `tags` to use `ability` on `target`.
    ///
    /// An empty `tags` is a no-op.
    pub fn order_tags(&mut self, tags: Vec<UnitTag>, ability: AbilityId, target: Target) {
        if tags.is_empty() {
            return;
        }
        self.pending.push(
            UnitOrder {
                ability,
                units: tags,
                target,
            }
            .into(),
        );
    }

    pub fn order<U: Tags + ?Sized>(&mut self, units: &U, ability: AbilityId, target: Target) {
        self.order_tags(units.tags(), ability, target);
    }

    pub fn unit_order(&mut self, unit: &impl HasTag, ability: AbilityId) {
        self.order_tags(vec![unit.tag()], ability, Target::None);
    }

    pub fn unit_order_target(
        &mut self,
        unit: &impl HasTag,
        ability: AbilityId,
        target: &impl HasTag,
    ) {
        self.order_tags(vec![unit.tag()], ability, Target::Unit(target.tag()));
    }

    pub fn unit_order_pos(&mut self, unit: &impl HasTag, ability: AbilityId, target: Point2D) {
        self.order_tags(vec![unit.tag()], ability, Target::Position(target));
    }

    pub fn units_order<U: Tags + ?Sized>(&mut self, units: &U, ability: AbilityId) {
        self.order(units, ability, Target::None);
    }

    pub fn units_order_target<U: Tags + ?Sized>(
        &mut self,
        units: &U,
        ability: AbilityId,
        target: &impl HasTag,
    ) {
        self.order(units, ability, Target::Unit(target.tag()));
    }

    pub fn units_order_pos<U: Tags + ?Sized>(
        &mut self,
        units: &U,
        ability: AbilityId,
        target: Point2D,
    ) {
        self.order(units, ability, Target::Position(target));
    }

    /// Send everything queued as one batch and report rejections.
    ///
    /// Does not touch the transport when nothing is queued.
    pub fn flush<T: ActionTransport + ?Sized>(&mut self, transport: &mut T) -> FlushSummary {
        if self.pending.is_empty() {
            return FlushSummary::default();
        }

        let batch = std::mem::take(&mut self.pending);
        let results = transport.send_actions(&batch);
        if results.len() != batch.len() {
            tracing::warn!(
                target: "sortie-core::Flush",
                sent = batch.len(),
                results = results.len(),
                "transport returned a result count that does not match the batch"
            );
        }

        let mut rejected = 0;
        for (command, result) in batch.iter().zip(results) {
            if result.is_success() {
                continue;
            }
            rejected += 1;
            if let Some(handler) = &self.error_handler {
                handler(command, result);
            }
        }

        tracing::debug!(
            target: "sortie-core::Flush",
            sent = batch.len(),
            rejected,
            "Flush({} commands)",
            batch.len()
        );

        FlushSummary {
            sent: batch.len(),
            rejected,
        }
    }
}
