use crate::simulation::StageCore;

use super::ActorId;

/// Called with the clicked actor's id.
pub type ClickHook = Box<dyn FnMut(&mut StageCore, ActorId)>;
/// Called with (this actor, actor collided with).
pub type CollisionHook = Box<dyn FnMut(&mut StageCore, ActorId, ActorId)>;
/// Called once per tick before anything moves.
pub type FrameHook = Box<dyn FnMut(&mut StageCore, ActorId)>;

/// Event callbacks attached to one actor.
///
/// Hooks get the whole stage, so they may add or remove actors (including
/// their own). The stage takes a hook out of its actor for the duration of
/// the call and puts it back afterwards if the actor still exists.
#[derive(Default)]
pub struct ActorHooks {
    pub on_click: Option<ClickHook>,
    pub on_collision: Option<CollisionHook>,
    pub on_frame: Option<FrameHook>,
}

impl ActorHooks {
    pub fn is_empty(&self) -> bool {
        self.on_click.is_none() && self.on_collision.is_none() && self.on_frame.is_none()
    }
}
