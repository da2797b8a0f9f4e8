use backdrop_common::{PointerState, Viewport};
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Scale from pointer pixels to target radians.
pub const POINTER_COEFF: f32 = 0.001;
/// One-pole low-pass gain: fraction of the remaining error closed per tick.
pub const FOLLOW_GAIN: f32 = 0.05;

/// Perspective camera that lazily follows the pointer.
///
/// Orientation is persistent state smoothed across frames with a fixed-gain
/// exponential filter; given a held pointer it converges geometrically toward
/// `pointer * POINTER_COEFF` with per-tick ratio `1 - FOLLOW_GAIN`.
#[derive(Debug, Clone, Copy)]
pub struct ParallaxCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Distance from the origin along +Z.
    pub distance: f32,
}

impl Default for ParallaxCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            fov: 75.0_f32.to_radians(),
            aspect: Viewport::default().aspect(),
            near: 0.1,
            far: 1000.0,
            distance: 30.0,
        }
    }
}

impl ParallaxCamera {
    /// The orientation the camera is decaying toward for a pointer offset.
    pub fn target_for(pointer: PointerState) -> (f32, f32) {
        (pointer.raw_x * POINTER_COEFF, pointer.raw_y * POINTER_COEFF)
    }

    /// Close `FOLLOW_GAIN` of the gap to the pointer target. Called once per
    /// tick; repeated calls with a held pointer converge, never overshoot.
    pub fn follow(&mut self, pointer: PointerState) {
        let (target_yaw, target_pitch) = Self::target_for(pointer);
        self.yaw += FOLLOW_GAIN * (target_yaw - self.yaw);
        self.pitch += FOLLOW_GAIN * (target_pitch - self.pitch);
    }

    /// Adopt new surface dimensions. Safe to call redundantly.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0)
    }

    pub fn view_matrix(&self) -> Mat4 {
        // Camera sits at (0, 0, distance) and rotates in place; the view
        // transform is the inverse of its world placement.
        Mat4::from_rotation_translation(self.orientation(), Vec3::new(0.0, 0.0, self.distance))
            .inverse()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_produces_valid_matrices() {
        let cam = ParallaxCamera::default();
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
        assert_eq!(cam.yaw, 0.0);
        assert_eq!(cam.pitch, 0.0);
    }

    #[test]
    fn target_scaled_from_pointer() {
        let p = PointerState {
            raw_x: 250.0,
            raw_y: -100.0,
        };
        let (yaw, pitch) = ParallaxCamera::target_for(p);
        assert!((yaw - 0.25).abs() < 1e-6);
        assert!((pitch + 0.1).abs() < 1e-6);
    }

    #[test]
    fn held_pointer_converges_geometrically() {
        let mut cam = ParallaxCamera::default();
        let p = PointerState {
            raw_x: 300.0,
            raw_y: 0.0,
        };
        let target = 300.0 * POINTER_COEFF;

        cam.follow(p);
        let error_1 = (target - cam.yaw).abs();
        cam.follow(p);
        let error_2 = (target - cam.yaw).abs();
        assert!((error_2 / error_1 - (1.0 - FOLLOW_GAIN)).abs() < 1e-3);

        for _ in 0..58 {
            cam.follow(p);
        }
        // After 60 ticks the residual is <= 0.95^60 of the initial error.
        let residual = (target - cam.yaw).abs() / target;
        assert!(residual <= 0.95_f32.powi(60) + 1e-4);
    }

    #[test]
    fn centered_pointer_decays_to_zero() {
        let mut cam = ParallaxCamera {
            yaw: 0.5,
            pitch: -0.3,
            ..Default::default()
        };
        let before_yaw = cam.yaw.abs();
        for _ in 0..120 {
            cam.follow(PointerState::default());
        }
        assert!(cam.yaw.abs() < before_yaw * 0.01);
        assert!(cam.pitch.abs() < 0.01);
        // Decay is monotone toward zero, never past it.
        assert!(cam.yaw >= 0.0);
        assert!(cam.pitch <= 0.0);
    }

    #[test]
    fn viewport_update_is_exact_and_idempotent() {
        let mut cam = ParallaxCamera::default();
        let vp = Viewport::new(1024, 512);
        cam.set_viewport(vp);
        assert_eq!(cam.aspect, 2.0);
        cam.set_viewport(vp);
        assert_eq!(cam.aspect, 2.0);
    }
}
