/// Stopwatch for the tick phases recorded in `StepStats`.
///
/// The browser has no `Instant`, so wasm builds read `Date.now()` and only
/// get millisecond resolution; sub-millisecond phases report 0 there.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    started_at_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    started_at: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            PerfTimer { started_at_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            PerfTimer { started_at: std::time::Instant::now() }
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            (js_sys::Date::now() - self.started_at_ms).max(0.0)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.started_at.elapsed().as_secs_f64() * 1000.0
        }
    }
}

/// Run one tick phase, writing its duration into `slot` when perf metrics
/// are on. With perf off the phase runs untimed and `slot` is untouched.
#[inline]
pub(crate) fn timed<T>(enabled: bool, slot: &mut f64, f: impl FnOnce() -> T) -> T {
    if !enabled {
        return f();
    }
    let t0 = PerfTimer::start();
    let out = f();
    *slot = t0.elapsed_ms();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_leaves_slot_alone_when_disabled() {
        let mut slot = -1.0;
        assert_eq!(timed(false, &mut slot, || 7), 7);
        assert_eq!(slot, -1.0);
    }

    #[test]
    fn timed_records_when_enabled() {
        let mut slot = -1.0;
        assert_eq!(timed(true, &mut slot, || "done"), "done");
        assert!(slot >= 0.0);
    }
}
