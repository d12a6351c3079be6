//! Actor systems: per-actor motion and stage-wide collision detection.

pub mod actor;
pub mod collision;

pub use actor::{Actor, ActorHooks, ActorId, MoveTarget, Surface, TRAIL_LEN};
pub use collision::{detect_pairs, CollisionPair, CollisionProbe};
