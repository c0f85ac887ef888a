mod command;
mod handler;
mod queue;
mod result;
mod session;
mod transport;
mod types;

pub mod config;
pub mod units;

pub use command::{ChatChannel, Command, Target, UnitOrder};
pub use config::{ConfigError, SessionConfig};
pub use handler::{filter_handler, no_op_handler, tee_handler, tracing_handler, ErrorHandlerFn};
pub use queue::{ActionQueue, FlushSummary};
pub use result::ActionResult;
pub use session::{BeforeStepFn, Session};
pub use transport::{ActionTransport, StepTransport};
pub use types::{AbilityId, Point, Point2D, UnitTag};
pub use units::{HasTag, Tags};
