//! Animata Engine - actor motion and collision kernel in WASM
//!
//! Architecture:
//! - core/        - logging macros
//! - geometry/    - points, vectors, ranges, boxes, lines
//! - domain/      - actor/stage configuration, shapes, draw commands
//! - systems/     - actor motion and collision detection
//! - simulation/  - the stage: tick pipeline, playback, wasm facade
//!
//! The kernel never draws. Hosts read `Stage::draw_list_json` after each
//! tick and render it themselves.

#[macro_use]
pub mod core;
pub mod geometry;
pub mod domain;
pub mod systems;
pub mod simulation;

pub mod stage {
    pub use crate::simulation::*;
}

use wasm_bindgen::prelude::*;

#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Animata engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{ActorConfig, DrawCommand, ShapeKind, StageSettings};
pub use geometry::{BoundingBox, Point, Vector};
pub use simulation::{FrameBudget, HostScheduler, Stage, StageCore, StageEvent, StepStats};
pub use systems::{Actor, ActorId};

// Direction constants for JS (degrees, y grows downwards)
#[wasm_bindgen]
pub fn dir_right() -> f32 { geometry::RIGHT }
#[wasm_bindgen]
pub fn dir_down() -> f32 { geometry::DOWN }
#[wasm_bindgen]
pub fn dir_left() -> f32 { geometry::LEFT }
#[wasm_bindgen]
pub fn dir_up() -> f32 { geometry::UP }
