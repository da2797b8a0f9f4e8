//! Rendering adapter: renderer-agnostic interface plus the parallax camera.
//!
//! # Invariants
//! - Renderers never mutate the scene; render state derives from scene state
//!   and the camera.
//! - Camera orientation is the only smoothed (cross-frame) state in the
//!   system; everything else is recomputed per tick.

mod camera;
mod renderer;

pub use camera::{FOLLOW_GAIN, POINTER_COEFF, ParallaxCamera};
pub use renderer::{Renderer, TextFrameRenderer};

pub fn crate_info() -> &'static str {
    "backdrop-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
