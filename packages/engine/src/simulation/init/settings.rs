use crate::domain::StageSettings;
use crate::systems::Surface;

use super::perf_stats::StepStats;
use super::StageCore;

pub(super) fn set_settings(stage: &mut StageCore, settings: StageSettings) {
    let previous_fps = stage.settings.fps;
    stage.settings = settings;
    if !set_fps(stage, stage.settings.fps) {
        stage.settings.fps = previous_fps;
    }
    let grid = stage.settings.canvas_grid;
    set_canvas_grid(stage, grid);
}

pub(super) fn set_fps(stage: &mut StageCore, fps: f32) -> bool {
    if !fps.is_finite() || fps <= 0.0 {
        console_warn!("ignoring fps {}: must be positive", fps);
        return false;
    }
    stage.settings.fps = fps;
    true
}

pub(super) fn set_bounding_boxes(stage: &mut StageCore, enabled: bool) {
    stage.settings.bounding_boxes = enabled;
}

pub(super) fn set_canvas_grid(stage: &mut StageCore, spacing: Option<u32>) {
    stage.settings.canvas_grid = spacing.filter(|&s| s > 0);
}

pub(super) fn set_surface(stage: &mut StageCore, width: f32, height: f32) -> bool {
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        console_warn!("ignoring surface {}x{}", width, height);
        return false;
    }
    stage.surface = Some(Surface::new(width, height));
    true
}

pub(super) fn enable_perf_metrics(stage: &mut StageCore, enabled: bool) {
    stage.perf_enabled = enabled;
    if !enabled {
        stage.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(stage: &StageCore) -> StepStats {
    stage.perf_stats.clone()
}
