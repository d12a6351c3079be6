//! Shapes - draw capability per actor kind
//!
//! Each kind is its own type behind the `Shape` trait; `build_shape` is the
//! only place that maps a configured kind name to an implementation.
//! Requests that cannot render (unknown kind, image without source) get a
//! `DegenerateShape`: the actor still exists and moves, it just never
//! appears in the draw list.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

use super::config::ActorConfig;
use super::draw::DrawCommand;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
    Image,
    Line,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Image => "Image",
            ShapeKind::Line => "Line",
        }
    }

    /// Case-insensitive lookup by name
    pub fn parse(name: &str) -> Option<Self> {
        [
            ShapeKind::Rectangle,
            ShapeKind::Circle,
            ShapeKind::Triangle,
            ShapeKind::Image,
            ShapeKind::Line,
        ]
        .into_iter()
        .find(|k| k.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// What a shape needs to know about its actor to describe itself.
pub struct ShapeBody<'a> {
    pub id: u32,
    pub origin: Point,
    pub width: f32,
    pub height: f32,
    pub rotation: f32,
    pub fill: &'a str,
    pub opacity: f32,
}

/// Draw capability of an actor
pub trait Shape {
    /// `None` for shapes that cannot render.
    fn kind(&self) -> Option<ShapeKind>;

    fn draw_command(&self, body: &ShapeBody) -> Option<DrawCommand>;

    /// Adjust the configured size (circles are always square).
    fn fit_size(&self, width: f32, height: f32) -> (f32, f32) {
        (width, height)
    }

    /// Called once per tick before the actor moves.
    fn advance_frame(&mut self) {}

    fn frame(&self) -> u32 {
        0
    }

    fn next_frame(&mut self) {}

    fn prev_frame(&mut self) {}
}

pub struct RectangleShape;

impl Shape for RectangleShape {
    fn kind(&self) -> Option<ShapeKind> {
        Some(ShapeKind::Rectangle)
    }

    fn draw_command(&self, body: &ShapeBody) -> Option<DrawCommand> {
        Some(DrawCommand::Rect {
            id: body.id,
            x: body.origin.x,
            y: body.origin.y,
            width: body.width,
            height: body.height,
            rotation: body.rotation,
            fill: body.fill.to_string(),
            opacity: body.opacity,
        })
    }
}

pub struct CircleShape;

impl Shape for CircleShape {
    fn kind(&self) -> Option<ShapeKind> {
        Some(ShapeKind::Circle)
    }

    fn draw_command(&self, body: &ShapeBody) -> Option<DrawCommand> {
        let radius = body.width / 2.0;
        Some(DrawCommand::Circle {
            id: body.id,
            cx: body.origin.x + radius,
            cy: body.origin.y + radius,
            radius,
            rotation: body.rotation,
            fill: body.fill.to_string(),
            opacity: body.opacity,
        })
    }

    fn fit_size(&self, width: f32, _height: f32) -> (f32, f32) {
        (width, width)
    }
}

/// Right triangle filling the lower-right half of the box
pub struct TriangleShape;

impl Shape for TriangleShape {
    fn kind(&self) -> Option<ShapeKind> {
        Some(ShapeKind::Triangle)
    }

    fn draw_command(&self, body: &ShapeBody) -> Option<DrawCommand> {
        let o = body.origin;
        Some(DrawCommand::Triangle {
            id: body.id,
            points: [
                o,
                Point::new(o.x + body.width, o.y),
                Point::new(o.x + body.width, o.y + body.height),
            ],
            rotation: body.rotation,
            fill: body.fill.to_string(),
            opacity: body.opacity,
        })
    }
}

/// Diagonal segment across the actor's box
pub struct LineShape;

impl Shape for LineShape {
    fn kind(&self) -> Option<ShapeKind> {
        Some(ShapeKind::Line)
    }

    fn draw_command(&self, body: &ShapeBody) -> Option<DrawCommand> {
        Some(DrawCommand::Line {
            id: body.id,
            from: body.origin,
            to: Point::new(body.origin.x + body.width, body.origin.y + body.height),
            rotation: body.rotation,
            opacity: body.opacity,
        })
    }
}

/// Horizontal sprite sheet; each cell is one actor-width wide.
pub struct SpriteShape {
    src: String,
    frame: u32,
    frame_count: u32,
    change_every: u32,
    since_change: u32,
}

impl SpriteShape {
    pub fn new(src: String, frame_count: u32, change_every: u32) -> Self {
        Self {
            src,
            frame: 0,
            frame_count: frame_count.max(1),
            change_every,
            since_change: 0,
        }
    }
}

impl Shape for SpriteShape {
    fn kind(&self) -> Option<ShapeKind> {
        Some(ShapeKind::Image)
    }

    fn draw_command(&self, body: &ShapeBody) -> Option<DrawCommand> {
        Some(DrawCommand::Image {
            id: body.id,
            src: self.src.clone(),
            source_x: body.width * self.frame as f32,
            x: body.origin.x,
            y: body.origin.y,
            width: body.width,
            height: body.height,
            rotation: body.rotation,
            opacity: body.opacity,
        })
    }

    fn advance_frame(&mut self) {
        if self.change_every == 0 {
            return;
        }
        self.since_change += 1;
        if self.since_change >= self.change_every {
            self.next_frame();
            self.since_change = 0;
        }
    }

    fn frame(&self) -> u32 {
        self.frame
    }

    fn next_frame(&mut self) {
        self.frame = (self.frame + 1) % self.frame_count;
    }

    fn prev_frame(&mut self) {
        self.frame = if self.frame == 0 { self.frame_count - 1 } else { self.frame - 1 };
    }
}

/// Stand-in for a shape that was requested but cannot be drawn.
pub struct DegenerateShape {
    reason: String,
}

impl DegenerateShape {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl Shape for DegenerateShape {
    fn kind(&self) -> Option<ShapeKind> {
        None
    }

    fn draw_command(&self, _body: &ShapeBody) -> Option<DrawCommand> {
        None
    }
}

/// Pick the draw capability for a config. Rectangle when unspecified.
///
/// `Err` carries a configuration message; callers fall back to
/// `DegenerateShape`.
pub fn build_shape(config: &ActorConfig) -> Result<Box<dyn Shape>, String> {
    let kind = match config.shape.as_deref() {
        None => ShapeKind::Rectangle,
        Some(name) => {
            ShapeKind::parse(name).ok_or_else(|| format!("unknown actor type '{}'", name))?
        }
    };

    let shape: Box<dyn Shape> = match kind {
        ShapeKind::Rectangle => Box::new(RectangleShape),
        ShapeKind::Circle => Box::new(CircleShape),
        ShapeKind::Triangle => Box::new(TriangleShape),
        ShapeKind::Line => Box::new(LineShape),
        ShapeKind::Image => {
            let src = config
                .src
                .as_deref()
                .filter(|s| !s.is_empty())
                .ok_or_else(|| "Image actor needs a src".to_string())?;
            Box::new(SpriteShape::new(
                src.to_string(),
                config.frame_count,
                config.change_frame_every,
            ))
        }
    };
    Ok(shape)
}
