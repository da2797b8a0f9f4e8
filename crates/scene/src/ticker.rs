use crate::scene::Scene;
use backdrop_common::PointerState;

/// Per-tick yaw increment for the core wireframe.
pub const CORE_YAW_RATE: f32 = 0.005;
/// Per-tick pitch increment for the core wireframe.
pub const CORE_PITCH_RATE: f32 = 0.002;

/// Angular frequency of the inner solid's pulse, in radians per second.
pub const INNER_PULSE_RATE: f32 = 2.0;
/// Amplitude of the inner solid's pulse around unit scale.
pub const INNER_PULSE_AMPLITUDE: f32 = 0.1;

/// Per-tick roll increments for the three rings.
pub const RING_ROLL_RATES: [f32; 3] = [0.002, -0.003, 0.001];

/// Starfield yaw in radians per elapsed second (absolute, not accumulated).
pub const PARTICLE_YAW_RATE: f32 = -0.05;
/// Starfield pitch per pixel of vertical pointer offset (absolute, unsmoothed).
pub const PARTICLE_PITCH_COEFF: f32 = 0.000_05;

/// Advance every entity transform by one tick.
///
/// Spinning entities accumulate per-tick increments; the inner solid's scale
/// and the starfield's orientation are absolute functions of elapsed time and
/// pointer state, so they are path-independent. Camera smoothing happens
/// outside the scene, at the host's camera.
pub fn advance(scene: &mut Scene, elapsed: f32, pointer: PointerState) {
    scene.core.spin.yaw += CORE_YAW_RATE;
    scene.core.spin.pitch += CORE_PITCH_RATE;

    scene.inner.scale = 1.0 + (elapsed * INNER_PULSE_RATE).sin() * INNER_PULSE_AMPLITUDE;

    for (ring, rate) in scene.rings.iter_mut().zip(RING_ROLL_RATES) {
        ring.spin.roll += rate;
    }

    scene.particles.spin.yaw = PARTICLE_YAW_RATE * elapsed;
    scene.particles.spin.pitch = pointer.raw_y * PARTICLE_PITCH_COEFF;

    scene.bump_tick();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;

    #[test]
    fn core_yaw_accumulates_linearly() {
        let mut scene = Scene::build(0);
        for _ in 0..200 {
            advance(&mut scene, 0.0, PointerState::default());
        }
        assert!((scene.core.spin.yaw - 200.0 * CORE_YAW_RATE).abs() < 1e-4);
        assert!((scene.core.spin.pitch - 200.0 * CORE_PITCH_RATE).abs() < 1e-4);
        assert_eq!(scene.tick(), 200);
    }

    #[test]
    fn inner_scale_matches_pulse_curve() {
        let mut scene = Scene::build(0);
        for t in [0.0_f32, 0.25, 1.0, 2.5, 10.0] {
            advance(&mut scene, t, PointerState::default());
            let expected = 1.0 + (t * 2.0).sin() * 0.1;
            assert!((scene.inner.scale - expected).abs() < 1e-6);
            assert!(scene.inner.scale >= 0.9 && scene.inner.scale <= 1.1);
        }
    }

    #[test]
    fn ring_rolls_accumulate_independently() {
        let mut scene = Scene::build(0);
        let initial_roll = scene.rings[0].spin.roll;
        for _ in 0..100 {
            advance(&mut scene, 0.0, PointerState::default());
        }
        assert!((scene.rings[0].spin.roll - initial_roll - 0.2).abs() < 1e-4);
        assert!((scene.rings[1].spin.roll + 0.3).abs() < 1e-4);
        assert!((scene.rings[2].spin.roll - 0.1).abs() < 1e-4);
    }

    #[test]
    fn particle_yaw_is_absolute_not_path_dependent() {
        // Two scenes reaching the same elapsed time through different tick
        // histories must agree on starfield yaw.
        let mut a = Scene::build(0);
        let mut b = Scene::build(0);

        for t in [0.1_f32, 0.5, 3.0] {
            advance(&mut a, t, PointerState::default());
        }
        advance(&mut b, 3.0, PointerState::default());

        assert_eq!(a.particles.spin.yaw, b.particles.spin.yaw);
        assert!((a.particles.spin.yaw - (-0.05 * 3.0)).abs() < 1e-6);
    }

    #[test]
    fn particle_pitch_tracks_pointer_directly() {
        let mut scene = Scene::build(0);
        let pointer = PointerState {
            raw_x: 0.0,
            raw_y: 400.0,
        };
        advance(&mut scene, 1.0, pointer);
        assert!((scene.particles.spin.pitch - 0.02).abs() < 1e-6);

        // No smoothing: pitch snaps back when the pointer recenters.
        advance(&mut scene, 2.0, PointerState::default());
        assert_eq!(scene.particles.spin.pitch, 0.0);
    }

    #[test]
    fn fixed_entity_set_survives_ticks() {
        let mut scene = Scene::build(0);
        for _ in 0..50 {
            advance(&mut scene, 1.0, PointerState::default());
        }
        assert_eq!(scene.entity_count(), 6);
    }
}
