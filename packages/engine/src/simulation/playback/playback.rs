use super::StageCore;

/// How many more ticks the loop may run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameBudget {
    Finite(u32),
    Forever,
}

impl FrameBudget {
    /// Wire form used by the JS host: any negative count means forever.
    pub fn from_wire(frames: i32) -> Self {
        if frames < 0 {
            FrameBudget::Forever
        } else {
            FrameBudget::Finite(frames as u32)
        }
    }

    pub fn to_wire(self) -> i32 {
        match self {
            FrameBudget::Forever => -1,
            FrameBudget::Finite(n) => n.min(i32::MAX as u32) as i32,
        }
    }

    pub fn has_remaining(&self) -> bool {
        !matches!(self, FrameBudget::Finite(0))
    }

    /// Take one tick from the budget. `false` when it was already spent.
    pub fn consume(&mut self) -> bool {
        match self {
            FrameBudget::Forever => true,
            FrameBudget::Finite(0) => false,
            FrameBudget::Finite(n) => {
                *n -= 1;
                true
            }
        }
    }
}

impl Default for FrameBudget {
    fn default() -> Self {
        FrameBudget::Finite(0)
    }
}

/// Host-side frame pacing (`setTimeout`, `requestAnimationFrame`, a test
/// harness...). The stage only ever asks for the next tick.
pub trait HostScheduler {
    fn schedule_next(&mut self, delay_ms: f64);
}

pub(super) fn play(stage: &mut StageCore, budget: FrameBudget) -> bool {
    if stage.surface.is_none() {
        console_warn!("play() called before a surface was set; nothing to animate");
        return false;
    }
    stage.budget = budget;
    stage.running = budget.has_remaining();
    true
}

pub(super) fn stop(stage: &mut StageCore) {
    stage.budget = FrameBudget::Finite(0);
    stage.running = false;
}

pub(super) fn drive_tick(stage: &mut StageCore, scheduler: &mut dyn HostScheduler) -> bool {
    if !stage.running || !stage.budget.consume() {
        stage.running = false;
        return false;
    }

    stage.tick();

    if stage.running && stage.budget.has_remaining() {
        scheduler.schedule_next(stage.settings.frame_delay_ms());
    } else {
        stage.running = false;
    }
    true
}
