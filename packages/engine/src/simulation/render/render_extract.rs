use crate::domain::DrawCommand;
use crate::geometry::BoundingBox;

use super::StageCore;

/// Background grid (when configured) followed by actors in stage order.
/// Bounding-box overlays, when enabled, follow the actor they belong to.
/// Degenerate actors produce nothing.
pub(super) fn draw_list(stage: &StageCore) -> Vec<DrawCommand> {
    let overlay = stage.settings.bounding_boxes;
    let mut out = Vec::with_capacity(stage.actors.len() * if overlay { 2 } else { 1 } + 1);

    if let (Some(spacing), Some(surface)) = (stage.settings.canvas_grid, stage.surface) {
        out.push(DrawCommand::Grid {
            spacing,
            width: surface.width,
            height: surface.height,
        });
    }

    for actor in &stage.actors {
        let Some(cmd) = actor.draw_command() else {
            continue;
        };
        out.push(cmd);
        if overlay {
            out.push(DrawCommand::BoundingBox {
                id: actor.id().0,
                current: actor.bounding_box(),
                next: BoundingBox::from_origin(actor.next_position(1.0), actor.width(), actor.height()),
            });
        }
    }
    out
}

pub(super) fn draw_list_json(stage: &StageCore) -> Result<String, String> {
    serde_json::to_string(&draw_list(stage)).map_err(|e| e.to_string())
}
