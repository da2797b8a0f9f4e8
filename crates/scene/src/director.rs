use crate::scene::Scene;
use crate::ticker;
use backdrop_common::PointerState;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation handle for a headless run loop.
///
/// Cloneable and thread-safe so a signal handler or another thread can stop
/// the loop; the loop itself checks the token once per iteration.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Fixed-timestep driver for a scene outside a windowed event loop.
///
/// The browser-style open-ended refresh callback becomes an explicit loop:
/// each iteration checks the cancel token, advances one tick at `dt` seconds,
/// and hands the scene to the frame sink (the draw call).
#[derive(Debug, Clone, Copy)]
pub struct Director {
    /// Seconds of synthesized clock time per tick.
    pub dt: f32,
}

impl Director {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }

    /// 60 ticks per second, matching a typical display refresh.
    pub fn at_display_rate() -> Self {
        Self::new(1.0 / 60.0)
    }

    /// Run until the token cancels or `max_ticks` elapse. The pointer offset
    /// is held constant for the duration of the run. Returns ticks executed.
    pub fn run<F>(
        &self,
        scene: &mut Scene,
        pointer: PointerState,
        token: &CancelToken,
        max_ticks: Option<u64>,
        mut sink: F,
    ) -> u64
    where
        F: FnMut(&Scene),
    {
        let mut executed = 0u64;
        loop {
            if token.is_cancelled() {
                tracing::debug!(executed, "run loop cancelled");
                break;
            }
            if let Some(limit) = max_ticks {
                if executed >= limit {
                    break;
                }
            }
            let elapsed = (executed + 1) as f32 * self.dt;
            ticker::advance(scene, elapsed, pointer);
            sink(scene);
            executed += 1;
        }
        executed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;

    #[test]
    fn runs_to_tick_limit() {
        let mut scene = Scene::build(0);
        let token = CancelToken::new();
        let mut frames = 0u64;
        let ran = Director::at_display_rate().run(
            &mut scene,
            PointerState::default(),
            &token,
            Some(120),
            |_| frames += 1,
        );
        assert_eq!(ran, 120);
        assert_eq!(frames, 120);
        assert_eq!(scene.tick(), 120);
    }

    #[test]
    fn cancelled_token_stops_immediately() {
        let mut scene = Scene::build(0);
        let token = CancelToken::new();
        token.cancel();
        let ran = Director::at_display_rate().run(
            &mut scene,
            PointerState::default(),
            &token,
            None,
            |_| {},
        );
        assert_eq!(ran, 0);
        assert_eq!(scene.tick(), 0);
    }

    #[test]
    fn token_cancels_mid_run() {
        let mut scene = Scene::build(0);
        let token = CancelToken::new();
        let cancel_from_sink = token.clone();
        let ran = Director::at_display_rate().run(
            &mut scene,
            PointerState::default(),
            &token,
            None,
            |s| {
                if s.tick() == 10 {
                    cancel_from_sink.cancel();
                }
            },
        );
        assert_eq!(ran, 10);
    }

    #[test]
    fn synthesized_clock_matches_tick_count() {
        let mut scene = Scene::build(0);
        let token = CancelToken::new();
        let director = Director::new(0.5);
        director.run(&mut scene, PointerState::default(), &token, Some(4), |_| {});
        // Final tick saw elapsed = 4 * 0.5 = 2.0s; particle yaw is absolute.
        assert!((scene.particles.spin.yaw - (-0.05 * 2.0)).abs() < 1e-6);
    }
}
