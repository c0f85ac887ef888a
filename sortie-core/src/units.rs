//! Handles that resolve to unit tags.
//!
//! The game-state layer owns the real unit model; it only needs to implement
//! these two traits for its handle types to be orderable through an
//! [`ActionQueue`](crate::ActionQueue).

use crate::UnitTag;

/// A single unit.
pub trait HasTag {
    fn tag(&self) -> UnitTag;
}

/// A group of units, resolved in order.
///
/// A group that resolves to no tags turns an order into a no-op.
pub trait Tags {
    fn tags(&self) -> Vec<UnitTag>;
}

impl HasTag for UnitTag {
    fn tag(&self) -> UnitTag {
        *self
    }
}

impl<T: HasTag + ?Sized> HasTag for &T {
    fn tag(&self) -> UnitTag {
        (**self).tag()
    }
}

impl<T: HasTag> Tags for [T] {
    fn tags(&self) -> Vec<UnitTag> {
        self.iter().map(HasTag::tag).collect()
    }
}

impl<T: HasTag, const N: usize> Tags for [T; N] {
    fn tags(&self) -> Vec<UnitTag> {
        self.as_slice().tags()
    }
}

impl<T: HasTag> Tags for Vec<T> {
    fn tags(&self) -> Vec<UnitTag> {
        self.as_slice().tags()
    }
}

/// A unit that may no longer exist.
impl<T: HasTag> Tags for Option<T> {
    fn tags(&self) -> Vec<UnitTag> {
        self.iter().map(HasTag::tag).collect()
    }
}
