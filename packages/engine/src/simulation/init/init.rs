use std::collections::VecDeque;

use crate::domain::StageSettings;

use super::perf_stats::StepStats;
use super::playback::FrameBudget;
use super::StageCore;

pub(super) fn create_stage_core(settings: StageSettings) -> StageCore {
    StageCore {
        actors: Vec::new(),
        next_id: 1,
        surface: None,
        settings,
        budget: FrameBudget::Finite(0),
        running: false,
        frame: 0,
        clicks: VecDeque::new(),
        click_handlers: Vec::new(),
        update_hook: None,
        rng_state: 12345,
        perf_enabled: false,
        perf_stats: StepStats::default(),
    }
}
