//! Frame timing for perf stats
//!
//! Both targets reduce to a millisecond clock: `Date.now()` in the browser,
//! a process-local `Instant` epoch natively. The timer itself only stores
//! the reading taken at `start`.

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    started_at_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        Self { started_at_ms: now_ms() }
    }

    /// Milliseconds since `start`; `Date.now()` can step backwards, so clamp
    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.started_at_ms).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_non_negative_and_grows() {
        let timer = PerfTimer::start();
        let first = timer.elapsed_ms();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = timer.elapsed_ms();
        assert!(first >= 0.0);
        assert!(second >= first);
    }
}
