use serde::Serialize;
use std::fmt;

/// Remote acknowledgment or rejection of one command.
///
/// Numbering follows the game API. Codes this crate does not name are kept as
/// [`ActionResult::Unknown`] so they still reach the error handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ActionResult {
    Success,
    NotSupported,
    Error,
    CantQueueThatOrder,
    Retry,
    Cooldown,
    QueueIsFull,
    RallyQueueIsFull,
    NotEnoughMinerals,
    NotEnoughVespene,
    NotEnoughTerrazine,
    NotEnoughCustom,
    NotEnoughFood,
    FoodUsageImpossible,
    NotEnoughLife,
    NotEnoughShields,
    NotEnoughEnergy,
    LifeSuppressed,
    ShieldsSuppressed,
    EnergySuppressed,
    NotEnoughCharges,
    CantAddMoreCharges,
    Unknown(u32),
}

const NAMED: [ActionResult; 22] = [
    ActionResult::Success,
    ActionResult::NotSupported,
    ActionResult::Error,
    ActionResult::CantQueueThatOrder,
    ActionResult::Retry,
    ActionResult::Cooldown,
    ActionResult::QueueIsFull,
    ActionResult::RallyQueueIsFull,
    ActionResult::NotEnoughMinerals,
    ActionResult::NotEnoughVespene,
    ActionResult::NotEnoughTerrazine,
    ActionResult::NotEnoughCustom,
    ActionResult::NotEnoughFood,
    ActionResult::FoodUsageImpossible,
    ActionResult::NotEnoughLife,
    ActionResult::NotEnoughShields,
    ActionResult::NotEnoughEnergy,
    ActionResult::LifeSuppressed,
    ActionResult::ShieldsSuppressed,
    ActionResult::EnergySuppressed,
    ActionResult::NotEnoughCharges,
    ActionResult::CantAddMoreCharges,
];

impl ActionResult {
    /// Map a wire code to a result. Named codes start at 1.
    pub fn from_code(code: u32) -> Self {
        code.checked_sub(1)
            .and_then(|i| NAMED.get(i as usize))
            .copied()
            .unwrap_or(ActionResult::Unknown(code))
    }

    pub fn code(self) -> u32 {
        match self {
            ActionResult::Unknown(code) => code,
            named => NAMED
                .iter()
                .position(|r| *r == named)
                .map(|i| i as u32 + 1)
                .unwrap_or(0),
        }
    }

    pub fn is_success(self) -> bool {
        self == ActionResult::Success
    }
}

impl fmt::Display for ActionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionResult::Unknown(code) => write!(f, "Unknown({code})"),
            named => write!(f, "{named:?}"),
        }
    }
}

impl From<u32> for ActionResult {
    fn from(code: u32) -> Self {
        ActionResult::from_code(code)
    }
}
