use crate::systems::ActorId;

use super::perf_timer::timed;
use super::{step_clicks, step_collisions, PerfTimer, StageCore};

pub(super) fn tick(stage: &mut StageCore) {
    // Counters are always kept; timings only when perf is enabled.
    let perf_on = stage.perf_enabled;
    stage.perf_stats.reset();
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let mut ms = 0.0;
    timed(perf_on, &mut ms, || step_clicks::process_clicks(stage));
    stage.perf_stats.clicks_ms = ms;

    timed(perf_on, &mut ms, || run_update_hook(stage));
    stage.perf_stats.update_hook_ms = ms;

    timed(perf_on, &mut ms, || run_frame_hooks(stage));
    stage.perf_stats.frame_hooks_ms = ms;

    timed(perf_on, &mut ms, || advance_actors(stage));
    stage.perf_stats.advance_ms = ms;

    let mut queue = timed(perf_on, &mut ms, || step_collisions::detect(stage));
    stage.perf_stats.detect_ms = ms;

    timed(perf_on, &mut ms, || step_collisions::dispatch(stage, &mut queue));
    stage.perf_stats.dispatch_ms = ms;

    stage.frame += 1;

    stage.perf_stats.actor_count = stage.actors.len() as u32;
    if let Some(t0) = step_start {
        stage.perf_stats.step_ms = t0.elapsed_ms();
    }
}

fn run_update_hook(stage: &mut StageCore) {
    if let Some(hook) = stage.update_hook.as_mut() {
        hook(&mut stage.actors);
    }
}

fn run_frame_hooks(stage: &mut StageCore) {
    let ids: Vec<ActorId> = stage
        .actors
        .iter()
        .filter(|a| a.hooks.on_frame.is_some())
        .map(ActorId::from)
        .collect();

    for id in ids {
        let Some(mut hook) = stage.actor_mut(id).and_then(|a| a.hooks.on_frame.take()) else {
            continue;
        };
        hook(stage, id);
        stage.perf_stats.frame_hooks_called += 1;
        if let Some(actor) = stage.actor_mut(id) {
            actor.hooks.on_frame.get_or_insert(hook);
        }
    }
}

fn advance_actors(stage: &mut StageCore) {
    let surface = stage.surface;
    for actor in stage.actors.iter_mut() {
        actor.advance_sprite();
        actor.advance(surface.as_ref());
    }
}
