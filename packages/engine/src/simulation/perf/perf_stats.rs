use wasm_bindgen::prelude::*;

/// Timings and counters for the last tick.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct StepStats {
    pub(super) step_ms: f64,
    pub(super) clicks_ms: f64,
    pub(super) update_hook_ms: f64,
    pub(super) frame_hooks_ms: f64,
    pub(super) advance_ms: f64,
    pub(super) detect_ms: f64,
    pub(super) dispatch_ms: f64,
    pub(super) actor_count: u32,
    pub(super) clicks_processed: u32,
    pub(super) actors_clicked: u32,
    pub(super) frame_hooks_called: u32,
    pub(super) collision_sources: u32,
    pub(super) collisions_detected: u32,
    pub(super) collisions_dispatched: u32,
    pub(super) collisions_skipped: u32,
}

impl StepStats {
    pub(crate) fn reset(&mut self) {
        *self = StepStats::default();
    }
}

#[wasm_bindgen]
impl StepStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn clicks_ms(&self) -> f64 { self.clicks_ms }
    #[wasm_bindgen(getter)]
    pub fn update_hook_ms(&self) -> f64 { self.update_hook_ms }
    #[wasm_bindgen(getter)]
    pub fn frame_hooks_ms(&self) -> f64 { self.frame_hooks_ms }
    #[wasm_bindgen(getter)]
    pub fn advance_ms(&self) -> f64 { self.advance_ms }
    #[wasm_bindgen(getter)]
    pub fn detect_ms(&self) -> f64 { self.detect_ms }
    #[wasm_bindgen(getter)]
    pub fn dispatch_ms(&self) -> f64 { self.dispatch_ms }
    #[wasm_bindgen(getter)]
    pub fn actor_count(&self) -> u32 { self.actor_count }
    #[wasm_bindgen(getter)]
    pub fn clicks_processed(&self) -> u32 { self.clicks_processed }
    #[wasm_bindgen(getter)]
    pub fn actors_clicked(&self) -> u32 { self.actors_clicked }
    #[wasm_bindgen(getter)]
    pub fn frame_hooks_called(&self) -> u32 { self.frame_hooks_called }
    #[wasm_bindgen(getter)]
    pub fn collision_sources(&self) -> u32 { self.collision_sources }
    #[wasm_bindgen(getter)]
    pub fn collisions_detected(&self) -> u32 { self.collisions_detected }
    #[wasm_bindgen(getter)]
    pub fn collisions_dispatched(&self) -> u32 { self.collisions_dispatched }
    #[wasm_bindgen(getter)]
    pub fn collisions_skipped(&self) -> u32 { self.collisions_skipped }
}
