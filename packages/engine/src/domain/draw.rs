use serde::Serialize;

use crate::geometry::{BoundingBox, Point};

/// One item of the per-frame draw list handed to the host renderer.
///
/// Coordinates are canvas pixels. `rotation` is in degrees and applies
/// around the centre of the actor's box.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DrawCommand {
    Rect {
        id: u32,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rotation: f32,
        fill: String,
        opacity: f32,
    },
    Circle {
        id: u32,
        cx: f32,
        cy: f32,
        radius: f32,
        rotation: f32,
        fill: String,
        opacity: f32,
    },
    Triangle {
        id: u32,
        points: [Point; 3],
        rotation: f32,
        fill: String,
        opacity: f32,
    },
    /// One cell of a horizontal sprite sheet
    #[serde(rename_all = "camelCase")]
    Image {
        id: u32,
        src: String,
        source_x: f32,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rotation: f32,
        opacity: f32,
    },
    Line {
        id: u32,
        from: Point,
        to: Point,
        rotation: f32,
        opacity: f32,
    },
    /// Debug overlay: current box and where the actor will be next tick
    #[serde(rename_all = "camelCase")]
    BoundingBox {
        id: u32,
        current: BoundingBox,
        next: BoundingBox,
    },
    Grid {
        spacing: u32,
        width: f32,
        height: f32,
    },
}

impl DrawCommand {
    pub fn actor_id(&self) -> Option<u32> {
        match self {
            DrawCommand::Rect { id, .. }
            | DrawCommand::Circle { id, .. }
            | DrawCommand::Triangle { id, .. }
            | DrawCommand::Image { id, .. }
            | DrawCommand::Line { id, .. }
            | DrawCommand::BoundingBox { id, .. } => Some(*id),
            DrawCommand::Grid { .. } => None,
        }
    }
}
