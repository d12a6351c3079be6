//! Stage - owns the actors and runs the per-tick pipeline
//!
//! Tick order:
//! 1. clicks (actor hit tests, then stage click handlers)
//! 2. update hook over the whole actor slice
//! 3. per-actor `on_frame`
//! 4. sprite animation + motion for every actor
//! 5. collision detection over a snapshot of boxes
//! 6. FIFO collision dispatch
//!
//! Every phase that calls back into user code walks a snapshot of actor
//! ids taken when the phase starts. Actors removed mid-phase are skipped;
//! actors added mid-phase are first seen by the next phase.

use std::collections::VecDeque;

use crate::domain::{ActorConfig, DrawCommand, StageSettings};
use crate::geometry::Point;
use crate::systems::{Actor, ActorId, Surface};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "step/step_clicks.rs"]
mod step_clicks;
#[path = "step/step_collisions.rs"]
mod step_collisions;
#[path = "playback/playback.rs"]
mod playback;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::{Stage, StageEvent};
pub use perf_stats::StepStats;
pub use playback::{FrameBudget, HostScheduler};

use perf_timer::PerfTimer;

/// Stage-level click handler, called with the click position.
pub type StageClickHandler = Box<dyn FnMut(&mut StageCore, Point)>;

/// Called once per tick, before any per-actor hook, with every actor.
pub type UpdateHook = Box<dyn FnMut(&mut [Actor])>;

pub struct StageCore {
    /// Insertion order, which is also id order
    actors: Vec<Actor>,
    next_id: u32,
    surface: Option<Surface>,
    settings: StageSettings,

    // Playback
    budget: FrameBudget,
    running: bool,
    frame: u64,

    // Input
    clicks: VecDeque<Point>,
    click_handlers: Vec<StageClickHandler>,
    update_hook: Option<UpdateHook>,

    rng_state: u32,

    perf_enabled: bool,
    perf_stats: StepStats,
}

impl Default for StageCore {
    fn default() -> Self {
        Self::new()
    }
}

impl StageCore {
    pub fn new() -> Self {
        init::create_stage_core(StageSettings::default())
    }

    pub fn with_settings(settings: StageSettings) -> Self {
        init::create_stage_core(settings)
    }

    pub fn from_settings_json(json: &str) -> Result<Self, String> {
        Ok(Self::with_settings(StageSettings::from_json(json)?))
    }

    pub fn settings(&self) -> &StageSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: StageSettings) {
        settings::set_settings(self, settings);
    }

    pub fn set_fps(&mut self, fps: f32) -> bool {
        settings::set_fps(self, fps)
    }

    pub fn set_bounding_boxes(&mut self, enabled: bool) {
        settings::set_bounding_boxes(self, enabled);
    }

    pub fn set_canvas_grid(&mut self, spacing: Option<u32>) {
        settings::set_canvas_grid(self, spacing);
    }

    /// Size of the canvas the actors bounce inside.
    pub fn set_surface(&mut self, width: f32, height: f32) -> bool {
        settings::set_surface(self, width, height)
    }

    pub fn surface(&self) -> Option<Surface> {
        self.surface
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Counters from the last tick; timings stay zero unless perf is enabled.
    pub fn perf_stats(&self) -> StepStats {
        settings::get_perf_stats(self)
    }

    // === Actors ===

    /// Build an actor from `config` and append it. Ids start at 1 and are
    /// never reused.
    pub fn add_actor(&mut self, config: &ActorConfig) -> &mut Actor {
        commands::add_actor(self, config)
    }

    pub fn add_actor_json(&mut self, json: &str) -> Result<ActorId, String> {
        commands::add_actor_json(self, json)
    }

    /// Remove the actor with `id`, keeping the order of the rest.
    pub fn remove_actor(&mut self, id: ActorId) -> Option<Actor> {
        commands::remove_actor(self, id)
    }

    pub fn clear(&mut self) {
        commands::clear(self);
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        commands::actor(self, id)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        commands::actor_mut(self, id)
    }

    pub fn contains_actor(&self, id: ActorId) -> bool {
        self.actor(id).is_some()
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Timed move at the stage's fps. `false` when the actor is gone or
    /// the input is not finite.
    pub fn move_actor_to(&mut self, id: ActorId, x: f32, y: f32, seconds: f32) -> bool {
        commands::move_actor_to(self, id, x, y, seconds)
    }

    /// Actors whose box contains `point`, in stage order.
    pub fn actors_at(&self, point: Point) -> Vec<ActorId> {
        step_clicks::actors_at(self, point)
    }

    // === Input ===

    /// Queue a click; it is handled at the start of the next tick.
    pub fn push_click(&mut self, x: f32, y: f32) {
        step_clicks::push_click(self, x, y);
    }

    pub fn pending_clicks(&self) -> usize {
        self.clicks.len()
    }

    pub fn on_click(&mut self, handler: impl FnMut(&mut StageCore, Point) + 'static) {
        self.click_handlers.push(Box::new(handler));
    }

    pub fn set_update_hook(&mut self, hook: impl FnMut(&mut [Actor]) + 'static) {
        self.update_hook = Some(Box::new(hook));
    }

    pub fn clear_update_hook(&mut self) {
        self.update_hook = None;
    }

    /// Random translucent colour for actors created without a fill.
    pub fn random_fill(&mut self) -> String {
        random::random_fill(&mut self.rng_state)
    }

    // === Simulation ===

    /// Run one tick of the pipeline regardless of playback state.
    pub fn tick(&mut self) {
        step::tick(self);
    }

    // === Playback ===

    /// Arm the loop. Fails (and logs) while there is no surface.
    pub fn play(&mut self, budget: FrameBudget) -> bool {
        playback::play(self, budget)
    }

    /// Zero the frame budget. A tick already in progress completes.
    pub fn stop(&mut self) {
        playback::stop(self);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn budget(&self) -> FrameBudget {
        self.budget
    }

    /// Run one tick if the budget allows and ask `scheduler` for the next
    /// one. Returns whether a tick ran.
    pub fn drive_tick(&mut self, scheduler: &mut dyn HostScheduler) -> bool {
        playback::drive_tick(self, scheduler)
    }

    // === Rendering ===

    pub fn draw_list(&self) -> Vec<DrawCommand> {
        render_extract::draw_list(self)
    }

    pub fn draw_list_json(&self) -> Result<String, String> {
        render_extract::draw_list_json(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
