use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::domain::StageSettings;
use crate::geometry::Point;
use crate::systems::{Actor, ActorId};

use super::perf_stats::StepStats;
use super::playback::{FrameBudget, HostScheduler};
use super::StageCore;

/// Something a hook observed during a tick, queued for the JS host.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StageEvent {
    ActorClicked { id: u32 },
    Collision { id: u32, other: u32 },
    CanvasClicked { x: f32, y: f32 },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ActorSnapshot<'a> {
    id: u32,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    speed: f32,
    direction: f32,
    rotation: f32,
    opacity: f32,
    fill_style: &'a str,
    shape: Option<&'static str>,
    frame: u32,
    moving_to: Option<Point>,
}

impl<'a> From<&'a Actor> for ActorSnapshot<'a> {
    fn from(actor: &'a Actor) -> Self {
        Self {
            id: actor.id().0,
            x: actor.x(),
            y: actor.y(),
            width: actor.width(),
            height: actor.height(),
            speed: actor.speed(),
            direction: actor.direction(),
            rotation: actor.rotation(),
            opacity: actor.opacity(),
            fill_style: actor.fill_style(),
            shape: actor.shape_kind().map(|k| k.name()),
            frame: actor.frame(),
            moving_to: actor.moving_to().map(|m| m.target),
        }
    }
}

/// Remembers the delay the stage asked for, so JS can schedule it.
struct NextFrame(Option<f64>);

impl HostScheduler for NextFrame {
    fn schedule_next(&mut self, delay_ms: f64) {
        self.0 = Some(delay_ms);
    }
}

type Outbox = Rc<RefCell<Vec<StageEvent>>>;

#[wasm_bindgen]
pub struct Stage {
    core: StageCore,
    events: Outbox,
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Stage {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: StageCore::new(),
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }

    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(json: &str) -> Result<Stage, JsValue> {
        let settings = StageSettings::from_json(json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self {
            core: StageCore::with_settings(settings),
            events: Rc::new(RefCell::new(Vec::new())),
        })
    }

    pub fn set_surface(&mut self, width: f32, height: f32) -> bool {
        self.core.set_surface(width, height)
    }

    #[wasm_bindgen(getter)]
    pub fn fps(&self) -> f32 { self.core.settings().fps }

    pub fn set_fps(&mut self, fps: f32) -> bool {
        self.core.set_fps(fps)
    }

    pub fn set_bounding_boxes(&mut self, enabled: bool) {
        self.core.set_bounding_boxes(enabled);
    }

    /// 0 turns the grid off
    pub fn set_canvas_grid(&mut self, spacing: u32) {
        self.core.set_canvas_grid(Some(spacing));
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn actor_count(&self) -> usize { self.core.actor_count() }

    /// Enable or disable per-step perf metrics
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> StepStats {
        self.core.perf_stats()
    }

    // === Actors ===

    /// Add an actor from its JSON config and return its id.
    pub fn add_actor(&mut self, json: &str) -> Result<u32, JsValue> {
        self.core
            .add_actor_json(json)
            .map(|id| id.0)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn remove_actor(&mut self, id: u32) -> bool {
        self.core.remove_actor(ActorId(id)).is_some()
    }

    pub fn clear(&mut self) {
        self.core.clear();
        self.events.borrow_mut().clear();
    }

    pub fn actor_json(&self, id: u32) -> Result<String, JsValue> {
        let actor = self
            .core
            .actor(ActorId(id))
            .ok_or_else(|| JsValue::from_str(&format!("no actor with id {}", id)))?;
        serde_json::to_string(&ActorSnapshot::from(actor)).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn actors_at(&self, x: f32, y: f32) -> Vec<u32> {
        self.core.actors_at(Point::new(x, y)).into_iter().map(|id| id.0).collect()
    }

    pub fn set_speed(&mut self, id: u32, speed: f32) -> bool {
        self.with_actor(id, |a| {
            a.set_speed(speed);
        })
    }

    pub fn set_direction(&mut self, id: u32, degrees: f32) -> bool {
        self.with_actor(id, |a| {
            a.set_direction(degrees);
        })
    }

    pub fn turn(&mut self, id: u32, degrees: f32) -> bool {
        self.with_actor(id, |a| {
            a.turn(degrees);
        })
    }

    pub fn set_rotation(&mut self, id: u32, degrees: f32) -> bool {
        self.with_actor(id, |a| {
            a.set_rotation(degrees);
        })
    }

    pub fn set_spin(&mut self, id: u32, degrees_per_frame: f32) -> bool {
        self.with_actor(id, |a| a.set_spin(degrees_per_frame))
    }

    pub fn set_turn_rate(&mut self, id: u32, degrees_per_frame: f32) -> bool {
        self.with_actor(id, |a| a.set_turn_rate(degrees_per_frame))
    }

    pub fn set_acceleration(&mut self, id: u32, rate: f32) -> bool {
        self.with_actor(id, |a| {
            a.set_acceleration(rate);
        })
    }

    pub fn accelerate_to(&mut self, id: u32, speed: f32, frames: u32) -> bool {
        self.with_actor(id, |a| {
            a.accelerate_to(speed, frames);
        })
    }

    pub fn move_to(&mut self, id: u32, x: f32, y: f32, seconds: f32) -> bool {
        self.core.move_actor_to(ActorId(id), x, y, seconds)
    }

    pub fn move_by(&mut self, id: u32, dx: f32, dy: f32) -> bool {
        self.with_actor(id, |a| {
            a.move_by(dx, dy);
        })
    }

    pub fn set_opacity(&mut self, id: u32, opacity: f32) -> bool {
        self.with_actor(id, |a| a.set_opacity(opacity))
    }

    pub fn set_fill_style(&mut self, id: u32, fill: String) -> bool {
        self.with_actor(id, |a| a.set_fill_style(fill))
    }

    pub fn next_frame(&mut self, id: u32) -> bool {
        self.with_actor(id, |a| {
            a.next_frame();
        })
    }

    pub fn prev_frame(&mut self, id: u32) -> bool {
        self.with_actor(id, |a| {
            a.prev_frame();
        })
    }

    // === Events ===

    /// Report this actor's collisions through `drain_events_json`.
    pub fn watch_collisions(&mut self, id: u32) -> bool {
        let outbox = Rc::clone(&self.events);
        self.with_actor(id, move |a| {
            a.on_collision(move |_, source, target| {
                outbox.borrow_mut().push(StageEvent::Collision { id: source.0, other: target.0 });
            });
        })
    }

    /// Report clicks on this actor through `drain_events_json`.
    pub fn watch_clicks(&mut self, id: u32) -> bool {
        let outbox = Rc::clone(&self.events);
        self.with_actor(id, move |a| {
            a.on_click(move |_, actor| {
                outbox.borrow_mut().push(StageEvent::ActorClicked { id: actor.0 });
            });
        })
    }

    /// Report every processed canvas click through `drain_events_json`.
    pub fn watch_canvas_clicks(&mut self) {
        let outbox = Rc::clone(&self.events);
        self.core.on_click(move |_, point| {
            outbox.borrow_mut().push(StageEvent::CanvasClicked { x: point.x, y: point.y });
        });
    }

    pub fn unwatch(&mut self, id: u32) -> bool {
        self.with_actor(id, |a| a.clear_hooks())
    }

    pub fn drain_events_json(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(&self.drain_events()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    // === Input ===

    pub fn push_click(&mut self, x: f32, y: f32) {
        self.core.push_click(x, y);
    }

    // === Simulation / playback ===

    /// One tick, ignoring the frame budget
    pub fn tick(&mut self) {
        self.core.tick();
    }

    /// `frames < 0` plays until `stop()`.
    pub fn play(&mut self, frames: i32) -> bool {
        self.core.play(FrameBudget::from_wire(frames))
    }

    pub fn stop(&mut self) {
        self.core.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool { self.core.is_running() }

    #[wasm_bindgen(getter)]
    pub fn frames_remaining(&self) -> i32 { self.core.budget().to_wire() }

    /// Run a tick if playing. Returns the delay in ms before the next call,
    /// or -1 when playback has finished.
    pub fn drive(&mut self) -> f64 {
        let mut next = NextFrame(None);
        self.core.drive_tick(&mut next);
        next.0.unwrap_or(-1.0)
    }

    // === Rendering ===

    pub fn draw_list_json(&self) -> Result<String, JsValue> {
        self.core.draw_list_json().map_err(|e| JsValue::from_str(&e))
    }
}

// Native-side access, not exported to JS
impl Stage {
    pub fn core(&self) -> &StageCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut StageCore {
        &mut self.core
    }

    pub fn drain_events(&mut self) -> Vec<StageEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    fn with_actor(&mut self, id: u32, f: impl FnOnce(&mut Actor)) -> bool {
        match self.core.actor_mut(ActorId(id)) {
            Some(actor) => {
                f(actor);
                true
            }
            None => false,
        }
    }
}
