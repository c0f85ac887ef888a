//! Sortie: batch the actions a real-time strategy bot issues during a step and
//! send them together right before the simulation advances.
//!
//! The core types live in [`sortie_core`]; real-time stepping lives in
//! [`pacer`].

pub use sortie_core::*;

pub mod pacer {
    pub use sortie_pacer::*;
}
