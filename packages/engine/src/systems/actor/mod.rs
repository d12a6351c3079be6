//! Actor - a moving, optionally colliding entity on the stage
//!
//! Position is the top-left corner of the actor's box. Heading and speed
//! live in one `Vector`, so turning the actor and turning its velocity are
//! the same operation.

mod body;
mod bounce;
mod hooks;
mod motion;

pub use body::{Actor, ActorId, MoveTarget, TRAIL_LEN};
pub use bounce::{reflect_into, Surface};
pub use hooks::{ActorHooks, ClickHook, CollisionHook, FrameHook};
