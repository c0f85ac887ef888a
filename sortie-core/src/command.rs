use crate::types::{AbilityId, Point, Point2D, UnitTag};
use serde::Serialize;

/// Who can read a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ChatChannel {
    /// Every player in the game.
    Broadcast,
    /// Teammates and observers only.
    Team,
}

/// What a unit order is aimed at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub enum Target {
    #[default]
    None,
    Unit(UnitTag),
    Position(Point2D),
}

/// One ability issued to a group of units.
///
/// `units` is never empty once the order sits in an [`ActionQueue`](crate::ActionQueue).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UnitOrder {
    pub ability: AbilityId,
    pub units: Vec<UnitTag>,
    pub target: Target,
}

/// A single outbound instruction to the game engine.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Command {
    Chat {
        channel: ChatChannel,
        message: String,
    },
    CameraMove {
        center: Point,
    },
    UnitOrder(UnitOrder),
}

impl Command {
    pub fn chat(channel: ChatChannel, message: impl Into<String>) -> Self {
        Command::Chat {
            channel,
            message: message.into(),
        }
    }

    pub fn camera_move(center: impl Into<Point>) -> Self {
        Command::CameraMove {
            center: center.into(),
        }
    }

    /// Short label used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Command::Chat {
                channel: ChatChannel::Broadcast,
                ..
            } => "chat",
            Command::Chat {
                channel: ChatChannel::Team,
                ..
            } => "chat-team",
            Command::CameraMove { .. } => "camera-move",
            Command::UnitOrder(_) => "unit-order",
        }
    }

    pub fn as_unit_order(&self) -> Option<&UnitOrder> {
        match self {
            Command::UnitOrder(order) => Some(order),
            _ => None,
        }
    }
}

impl From<UnitOrder> for Command {
    fn from(order: UnitOrder) -> Self {
        Command::UnitOrder(order)
    }
}
