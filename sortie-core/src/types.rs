use serde::Serialize;
use std::fmt;

/// Engine-assigned identifier of a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct UnitTag(pub u64);

/// Identifier of an ability a unit can be ordered to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct AbilityId(pub u32);

/// Position on the map plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

/// Position in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point2D {
    pub fn new(x: f32, y: f32) -> Self {
        Point2D { x, y }
    }

    /// Lift onto the ground plane (`z = 0`).
    pub fn to_point(self) -> Point {
        Point {
            x: self.x,
            y: self.y,
            z: 0.0,
        }
    }
}

impl From<Point2D> for Point {
    fn from(p: Point2D) -> Self {
        p.to_point()
    }
}

impl fmt::Display for UnitTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for AbilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ability:{}", self.0)
    }
}
