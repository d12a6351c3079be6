use crate::domain::ActorConfig;
use crate::systems::{Actor, ActorId};

use super::StageCore;

pub(super) fn add_actor<'a>(stage: &'a mut StageCore, config: &ActorConfig) -> &'a mut Actor {
    let id = ActorId(stage.next_id);
    stage.next_id += 1;

    let fill = match &config.fill_style {
        Some(fill) => fill.clone(),
        None => stage.random_fill(),
    };
    stage.actors.push(Actor::new(id, config, fill));

    let index = stage.actors.len() - 1;
    &mut stage.actors[index]
}

pub(super) fn add_actor_json(stage: &mut StageCore, json: &str) -> Result<ActorId, String> {
    let config = ActorConfig::from_json(json)?;
    Ok(add_actor(stage, &config).id())
}

pub(super) fn remove_actor(stage: &mut StageCore, id: ActorId) -> Option<Actor> {
    let index = position(stage, id)?;
    Some(stage.actors.remove(index))
}

pub(super) fn clear(stage: &mut StageCore) {
    stage.actors.clear();
    stage.clicks.clear();
}

/// Ids only grow, so the list is sorted by id.
#[inline]
pub(super) fn position(stage: &StageCore, id: ActorId) -> Option<usize> {
    stage.actors.binary_search_by_key(&id, |a| a.id()).ok()
}

pub(super) fn actor(stage: &StageCore, id: ActorId) -> Option<&Actor> {
    position(stage, id).map(|i| &stage.actors[i])
}

pub(super) fn actor_mut(stage: &mut StageCore, id: ActorId) -> Option<&mut Actor> {
    let index = position(stage, id)?;
    Some(&mut stage.actors[index])
}

pub(super) fn move_actor_to(stage: &mut StageCore, id: ActorId, x: f32, y: f32, seconds: f32) -> bool {
    let fps = stage.settings.fps;
    match actor_mut(stage, id) {
        Some(actor) => actor.move_to(x, y, seconds, fps),
        None => false,
    }
}
