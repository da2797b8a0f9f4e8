use glam::{EulerRot, Quat};
use serde::{Deserialize, Serialize};

/// Euler orientation of an entity: yaw (Y), pitch (X), roll (Z), in radians.
///
/// Accumulating fields are intentionally unbounded; spinning entities keep
/// adding to them for the lifetime of the session and angles wrap naturally
/// under the rendering convention.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Spin {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl Spin {
    pub const fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Convert to a quaternion using XYZ application order (pitch, yaw, roll).
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, self.roll)
    }
}

/// Latest pointer offset from the viewport center, in pixels.
///
/// Overwritten on every pointer-move event, read once per tick. Offsets are
/// signed; a pointer left of / above center is negative. No validation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerState {
    pub raw_x: f32,
    pub raw_y: f32,
}

impl PointerState {
    /// Offset of a client-space position from the center of `viewport`.
    pub fn from_client(client_x: f32, client_y: f32, viewport: Viewport) -> Self {
        Self {
            raw_x: client_x - viewport.width as f32 / 2.0,
            raw_y: client_y - viewport.height as f32 / 2.0,
        }
    }
}

/// Output surface dimensions in physical pixels.
///
/// Dimensions are clamped to at least 1 so the aspect ratio and GPU surface
/// configuration stay valid during window minimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_default_is_zero() {
        let s = Spin::default();
        assert_eq!(s.yaw, 0.0);
        assert_eq!(s.pitch, 0.0);
        assert_eq!(s.roll, 0.0);
        assert_eq!(s.to_quat(), Quat::IDENTITY);
    }

    #[test]
    fn pointer_offset_from_center() {
        let vp = Viewport::new(800, 600);
        let p = PointerState::from_client(400.0, 300.0, vp);
        assert_eq!(p, PointerState::default());

        let p = PointerState::from_client(0.0, 0.0, vp);
        assert_eq!(p.raw_x, -400.0);
        assert_eq!(p.raw_y, -300.0);
    }

    #[test]
    fn viewport_clamps_to_one() {
        let vp = Viewport::new(0, 0);
        assert_eq!(vp.width, 1);
        assert_eq!(vp.height, 1);
    }

    #[test]
    fn viewport_aspect() {
        let vp = Viewport::new(1920, 1080);
        assert!((vp.aspect() - 16.0 / 9.0).abs() < 1e-6);
    }
}
