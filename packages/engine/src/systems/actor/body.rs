use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::shapes::{build_shape, DegenerateShape, Shape, ShapeBody, ShapeKind};
use crate::domain::{ActorConfig, DrawCommand};
use crate::geometry::{normalize_degrees, BoundingBox, Point, Vector};

use super::hooks::{ActorHooks, ClickHook, CollisionHook, FrameHook};

/// How many past positions an actor remembers.
pub const TRAIL_LEN: usize = 20;

/// Stage-assigned identifier. Monotonically increasing, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// Pending timed `move_to`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveTarget {
    pub target: Point,
    pub frames_remaining: u32,
}

pub struct Actor {
    pub(super) id: ActorId,
    /// Top-left corner
    pub(super) pos: Point,
    pub(super) width: f32,
    pub(super) height: f32,
    /// Speed (magnitude) and heading (direction)
    pub(super) vector: Vector,
    /// Visual rotation in degrees, independent of heading
    pub(super) rotation: f32,
    pub(super) spin: f32,
    pub(super) turn_rate: f32,
    pub(super) acceleration: f32,
    /// Speed to stop accelerating at (`accelerate_to`)
    pub(super) accelerate_target: Option<f32>,
    pub(super) moving_to: Option<MoveTarget>,
    pub(super) trail: VecDeque<Point>,
    shape: Box<dyn Shape>,
    fill_style: String,
    opacity: f32,
    pub(crate) hooks: ActorHooks,
}

#[inline]
fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}

impl Actor {
    /// Build an actor from its config. `fallback_fill` is used when the
    /// config has no fill style.
    ///
    /// Non-finite numbers fall back to the config defaults. An unrenderable
    /// shape request is logged and leaves a degenerate (invisible) actor.
    pub fn new(id: ActorId, config: &ActorConfig, fallback_fill: String) -> Self {
        let defaults = ActorConfig::default();

        let shape = build_shape(config).unwrap_or_else(|reason| {
            console_warn!("actor {}: {}; it will not be drawn", id.0, reason);
            Box::new(DegenerateShape::new(reason)) as Box<dyn Shape>
        });

        let width = finite_or(config.width, defaults.width).max(0.0);
        let height = finite_or(config.height, defaults.height).max(0.0);
        let (width, height) = shape.fit_size(width, height);

        let vector = Vector::new(
            finite_or(config.speed, defaults.speed),
            finite_or(config.direction, defaults.direction),
        );

        Self {
            id,
            pos: Point::new(finite_or(config.x, defaults.x), finite_or(config.y, defaults.y)),
            width,
            height,
            vector,
            rotation: normalize_degrees(finite_or(config.rotation, defaults.rotation)),
            spin: finite_or(config.spin, defaults.spin),
            turn_rate: finite_or(config.turn_rate, defaults.turn_rate),
            acceleration: finite_or(config.acceleration, defaults.acceleration),
            accelerate_target: None,
            moving_to: None,
            trail: VecDeque::with_capacity(TRAIL_LEN),
            shape,
            fill_style: config.fill_style.clone().unwrap_or(fallback_fill),
            opacity: finite_or(config.opacity, defaults.opacity).clamp(0.0, 1.0),
            hooks: ActorHooks::default(),
        }
    }

    #[inline]
    pub fn id(&self) -> ActorId {
        self.id
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn vector(&self) -> &Vector {
        &self.vector
    }

    /// Direct access to the velocity; the vector keeps itself consistent.
    pub fn vector_mut(&mut self) -> &mut Vector {
        &mut self.vector
    }

    /// Pixels per frame
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vector.magnitude()
    }

    /// Heading in degrees, [0, 360)
    #[inline]
    pub fn direction(&self) -> f32 {
        self.vector.direction()
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    #[inline]
    pub fn spin(&self) -> f32 {
        self.spin
    }

    pub fn set_spin(&mut self, degrees_per_frame: f32) {
        if degrees_per_frame.is_finite() {
            self.spin = degrees_per_frame;
        }
    }

    #[inline]
    pub fn turn_rate(&self) -> f32 {
        self.turn_rate
    }

    pub fn set_turn_rate(&mut self, degrees_per_frame: f32) {
        if degrees_per_frame.is_finite() {
            self.turn_rate = degrees_per_frame;
        }
    }

    #[inline]
    pub fn acceleration(&self) -> f32 {
        self.acceleration
    }

    pub fn moving_to(&self) -> Option<&MoveTarget> {
        self.moving_to.as_ref()
    }

    pub fn is_moving_to_position(&self) -> bool {
        self.moving_to.is_some()
    }

    /// Oldest first, at most `TRAIL_LEN` entries.
    pub fn trail(&self) -> impl Iterator<Item = &Point> {
        self.trail.iter()
    }

    /// Recomputed on every call from the current position and size.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_origin(self.pos, self.width, self.height)
    }

    pub fn overlaps(&self, other: &Actor) -> bool {
        self.bounding_box().overlaps(&other.bounding_box())
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bounding_box().contains(point)
    }

    // === Appearance ===

    pub fn shape_kind(&self) -> Option<ShapeKind> {
        self.shape.kind()
    }

    pub fn is_renderable(&self) -> bool {
        self.shape.kind().is_some()
    }

    pub fn fill_style(&self) -> &str {
        &self.fill_style
    }

    pub fn set_fill_style(&mut self, fill: impl Into<String>) {
        self.fill_style = fill.into();
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Clamped to [0, 1].
    pub fn set_opacity(&mut self, opacity: f32) {
        if opacity.is_finite() {
            self.opacity = opacity.clamp(0.0, 1.0);
        }
    }

    /// Current sprite sheet cell (0 for non-image shapes)
    pub fn frame(&self) -> u32 {
        self.shape.frame()
    }

    pub fn next_frame(&mut self) -> &mut Self {
        self.shape.next_frame();
        self
    }

    pub fn prev_frame(&mut self) -> &mut Self {
        self.shape.prev_frame();
        self
    }

    pub(crate) fn advance_sprite(&mut self) {
        self.shape.advance_frame();
    }

    pub fn draw_command(&self) -> Option<DrawCommand> {
        self.shape.draw_command(&ShapeBody {
            id: self.id.0,
            origin: self.pos,
            width: self.width,
            height: self.height,
            rotation: self.rotation,
            fill: &self.fill_style,
            opacity: self.opacity,
        })
    }

    // === Hooks ===

    pub fn on_click(&mut self, hook: impl FnMut(&mut crate::simulation::StageCore, ActorId) + 'static) -> &mut Self {
        self.hooks.on_click = Some(Box::new(hook) as ClickHook);
        self
    }

    pub fn on_collision(
        &mut self,
        hook: impl FnMut(&mut crate::simulation::StageCore, ActorId, ActorId) + 'static,
    ) -> &mut Self {
        self.hooks.on_collision = Some(Box::new(hook) as CollisionHook);
        self
    }

    pub fn on_frame(&mut self, hook: impl FnMut(&mut crate::simulation::StageCore, ActorId) + 'static) -> &mut Self {
        self.hooks.on_frame = Some(Box::new(hook) as FrameHook);
        self
    }

    pub fn clear_hooks(&mut self) {
        self.hooks = ActorHooks::default();
    }

    /// Collision scans only start from actors with a collision hook.
    pub fn has_collision_hook(&self) -> bool {
        self.hooks.on_collision.is_some()
    }
}

impl From<&Actor> for ActorId {
    fn from(actor: &Actor) -> Self {
        actor.id
    }
}

impl From<u32> for ActorId {
    fn from(id: u32) -> Self {
        ActorId(id)
    }
}

impl std::fmt::Debug for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Actor")
            .field("id", &self.id)
            .field("pos", &self.pos)
            .field("size", &(self.width, self.height))
            .field("vector", &self.vector)
            .field("rotation", &self.rotation)
            .field("shape", &self.shape.kind())
            .field("moving_to", &self.moving_to)
            .field("has_hooks", &!self.hooks.is_empty())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(config: ActorConfig) -> Actor {
        Actor::new(ActorId(1), &config, "black".into())
    }

    #[test]
    fn defaults_apply() {
        let a = actor(ActorConfig::default());
        assert_eq!((a.width(), a.height()), (50.0, 50.0));
        assert_eq!(a.position(), Point::new(0.0, 0.0));
        assert_eq!(a.speed(), 0.0);
        assert!((a.direction() - 10.0).abs() < 1e-4);
        assert_eq!(a.rotation(), 0.0);
        assert_eq!(a.fill_style(), "black");
        assert_eq!(a.shape_kind(), Some(ShapeKind::Rectangle));
    }

    #[test]
    fn bounding_box_tracks_position() {
        let mut a = actor(ActorConfig::default().at(5.0, 6.0).sized(10.0, 20.0));
        assert_eq!(a.bounding_box(), BoundingBox::new(5.0, 15.0, 6.0, 26.0));
        a.move_by(1.0, 1.0);
        assert_eq!(a.bounding_box(), BoundingBox::new(6.0, 16.0, 7.0, 27.0));
    }

    #[test]
    fn unknown_shape_gives_degenerate_actor() {
        let a = actor(ActorConfig { shape: Some("Blob".into()), ..ActorConfig::default() });
        assert!(!a.is_renderable());
        assert!(a.draw_command().is_none());
        assert_eq!(a.width(), 50.0);
    }

    #[test]
    fn circle_forces_square_size() {
        let a = actor(ActorConfig::default().sized(30.0, 70.0).shaped(ShapeKind::Circle));
        assert_eq!((a.width(), a.height()), (30.0, 30.0));
    }

    #[test]
    fn non_finite_config_falls_back_to_defaults() {
        let a = actor(ActorConfig { x: f32::NAN, speed: f32::INFINITY, ..ActorConfig::default() });
        assert_eq!(a.x(), 0.0);
        assert_eq!(a.speed(), 0.0);
    }

    #[test]
    fn overlapping_actors() {
        let a = actor(ActorConfig::default().sized(10.0, 10.0));
        let b = actor(ActorConfig::default().at(5.0, 5.0).sized(10.0, 10.0));
        let c = actor(ActorConfig::default().at(20.0, 20.0).sized(10.0, 10.0));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn opacity_is_clamped() {
        let mut a = actor(ActorConfig::default());
        a.set_opacity(3.0);
        assert_eq!(a.opacity(), 1.0);
        a.set_opacity(-1.0);
        assert_eq!(a.opacity(), 0.0);
    }
}
