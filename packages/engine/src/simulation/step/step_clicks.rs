use crate::geometry::Point;
use crate::systems::ActorId;

use super::StageCore;

pub(super) fn push_click(stage: &mut StageCore, x: f32, y: f32) {
    let point = Point::new(x, y);
    if point.is_finite() {
        stage.clicks.push_back(point);
    }
}

pub(super) fn actors_at(stage: &StageCore, point: Point) -> Vec<ActorId> {
    stage
        .actors
        .iter()
        .filter(|a| a.contains(point))
        .map(ActorId::from)
        .collect()
}

/// Drain the click queue. Clicks queued by a handler wait for the next tick.
pub(super) fn process_clicks(stage: &mut StageCore) {
    let clicks = std::mem::take(&mut stage.clicks);
    for point in clicks {
        stage.perf_stats.clicks_processed += 1;

        for id in actors_at(stage, point) {
            let Some(mut hook) = stage.actor_mut(id).and_then(|a| a.hooks.on_click.take()) else {
                continue;
            };
            hook(stage, id);
            stage.perf_stats.actors_clicked += 1;
            if let Some(actor) = stage.actor_mut(id) {
                actor.hooks.on_click.get_or_insert(hook);
            }
        }

        let mut handlers = std::mem::take(&mut stage.click_handlers);
        for handler in handlers.iter_mut() {
            handler(stage, point);
        }
        // Handlers registered during dispatch go after the existing ones.
        handlers.append(&mut stage.click_handlers);
        stage.click_handlers = handlers;
    }
}
