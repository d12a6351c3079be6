use std::collections::VecDeque;

use crate::systems::{detect_pairs, CollisionPair, CollisionProbe};

use super::StageCore;

pub(super) fn detect(stage: &mut StageCore) -> VecDeque<CollisionPair> {
    let probes: Vec<CollisionProbe> = stage.actors.iter().map(CollisionProbe::from).collect();
    let pairs = detect_pairs(&probes);

    stage.perf_stats.collision_sources = probes.iter().filter(|p| p.is_source).count() as u32;
    stage.perf_stats.collisions_detected = pairs.len() as u32;
    pairs.into()
}

/// Pop pairs in detection order. A pair whose source or target has been
/// removed by an earlier hook is dropped.
pub(super) fn dispatch(stage: &mut StageCore, queue: &mut VecDeque<CollisionPair>) {
    while let Some((source, target)) = queue.pop_front() {
        if !stage.contains_actor(target) {
            stage.perf_stats.collisions_skipped += 1;
            continue;
        }
        let Some(mut hook) = stage.actor_mut(source).and_then(|a| a.hooks.on_collision.take()) else {
            stage.perf_stats.collisions_skipped += 1;
            continue;
        };
        hook(stage, source, target);
        stage.perf_stats.collisions_dispatched += 1;
        if let Some(actor) = stage.actor_mut(source) {
            actor.hooks.on_collision.get_or_insert(hook);
        }
    }
}
