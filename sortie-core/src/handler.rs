use crate::{ActionResult, Command};
use std::sync::Arc;

/// Called once per command the remote side rejected.
pub type ErrorHandlerFn = Arc<dyn Fn(&Command, ActionResult) + Send + Sync>;

/// No-op handler
pub fn no_op_handler() -> ErrorHandlerFn {
    Arc::new(|_command: &Command, _result: ActionResult| {})
}

/// Tracing handler - logs every rejected command at `warn`
pub fn tracing_handler() -> ErrorHandlerFn {
    Arc::new(|command: &Command, result: ActionResult| {
        let rendered =
            serde_json::to_string(command).unwrap_or_else(|_| format!("{command:?}"));
        tracing::warn!(
            target: "sortie-core::ActionError",
            code = result.code(),
            kind = command.kind(),
            "ActionError: {} {}",
            result,
            rendered
        );
    })
}

/// Filter handler with custom predicate
pub fn filter_handler<F>(wrapped: ErrorHandlerFn, predicate: F) -> ErrorHandlerFn
where
    F: Fn(&Command, ActionResult) -> bool + Send + Sync + 'static,
{
    Arc::new(move |command: &Command, result: ActionResult| {
        if predicate(command, result) {
            wrapped(command, result);
        }
    })
}

/// Tee handler - call multiple handlers
pub fn tee_handler(handlers: Vec<ErrorHandlerFn>) -> ErrorHandlerFn {
    Arc::new(move |command: &Command, result: ActionResult| {
        for handler in &handlers {
            handler(command, result);
        }
    })
}
